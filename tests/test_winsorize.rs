//! Unit tests for IQR winsorization

use churnprep::pipeline::{quantile, winsorize_outliers, TableSchema};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

fn numeric_schema(columns: &[&str]) -> TableSchema {
    TableSchema {
        numeric: columns.iter().map(|s| s.to_string()).collect(),
        categorical: vec![],
        label: "churn".to_string(),
        tenure: "tenure".to_string(),
        coerce_candidates: vec![],
    }
}

#[test]
fn test_values_clipped_into_fences() {
    // Eleven distinct values with one extreme outlier
    let raw: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 100.0];
    let mut df = df! { "charges" => raw.clone() }.unwrap();

    // Fences from the pre-clip quartiles
    let q1 = quantile(&raw, 0.25).unwrap();
    let q3 = quantile(&raw, 0.75).unwrap();
    let iqr = q3 - q1;
    let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let outcomes = winsorize_outliers(&mut df, &numeric_schema(&["charges"]), 10, 1.5).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].clipped, 1);
    assert!((outcomes[0].lower - lower).abs() < 1e-9);
    assert!((outcomes[0].upper - upper).abs() < 1e-9);

    for value in common::column_as_f64(&df, "charges") {
        assert!(
            value >= lower && value <= upper,
            "value {} outside fences [{}, {}]",
            value,
            lower,
            upper
        );
    }
}

#[test]
fn test_row_count_unaffected() {
    let mut df = df! {
        "charges" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 500.0]
    }
    .unwrap();
    let rows = df.height();

    winsorize_outliers(&mut df, &numeric_schema(&["charges"]), 10, 1.5).unwrap();
    assert_eq!(df.height(), rows);
}

#[test]
fn test_low_cardinality_column_skipped() {
    // A 0/1 flag column must never be clipped
    let mut df = df! {
        "flag" => [0.0f64, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]
    }
    .unwrap();

    let outcomes = winsorize_outliers(&mut df, &numeric_schema(&["flag"]), 10, 1.5).unwrap();
    assert!(outcomes.is_empty());

    let values = common::column_as_f64(&df, "flag");
    assert!(values.iter().all(|v| *v == 0.0 || *v == 1.0));
}

#[test]
fn test_threshold_is_exclusive() {
    // Exactly 10 distinct values does not exceed a threshold of 10
    let mut df = df! {
        "charges" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    }
    .unwrap();

    let outcomes = winsorize_outliers(&mut df, &numeric_schema(&["charges"]), 10, 1.5).unwrap();
    assert!(outcomes.is_empty());
}

#[test]
fn test_inlier_column_reports_zero_clips() {
    // More than 10 distinct values but nothing beyond the fences
    let values: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let mut df = df! { "charges" => values.clone() }.unwrap();

    let outcomes = winsorize_outliers(&mut df, &numeric_schema(&["charges"]), 10, 1.5).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].clipped, 0);
    assert_eq!(common::column_as_f64(&df, "charges"), values);
}
