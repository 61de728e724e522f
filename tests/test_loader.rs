//! Tests for dataset loading and saving

use churnprep::pipeline::{load_dataset, save_dataset};
use polars::prelude::*;
use std::path::Path;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_csv_round_trip() {
    let mut df = create_raw_churn_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let loaded = load_dataset(&csv_path, 10000).unwrap();

    assert_eq!(loaded.shape(), df.shape());
    assert_has_columns(&loaded, &["Customer ID", "Tenure", "Churn"]);
}

#[test]
fn test_parquet_round_trip() {
    let mut df = create_raw_churn_dataframe();
    let (_temp_dir, parquet_path) = create_temp_parquet(&mut df);

    let loaded = load_dataset(&parquet_path, 10000).unwrap();

    assert_eq!(loaded.shape(), df.shape());
    // Parquet preserves dtypes exactly
    assert_eq!(loaded.dtypes(), df.dtypes());
}

#[test]
fn test_csv_and_parquet_agree() {
    let mut df = create_raw_churn_dataframe();
    let (_csv_dir, csv_path) = create_temp_csv(&mut df);
    let (_parquet_dir, parquet_path) = create_temp_parquet(&mut df);

    let from_csv = load_dataset(&csv_path, 10000).unwrap();
    let from_parquet = load_dataset(&parquet_path, 10000).unwrap();

    assert_eq!(from_csv.shape(), from_parquet.shape());
    assert_eq!(from_csv.get_column_names(), from_parquet.get_column_names());
}

#[test]
fn test_full_schema_scan() {
    let mut df = create_raw_churn_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    // infer_schema_length of 0 requests a full scan
    let loaded = load_dataset(&csv_path, 0).unwrap();
    assert_eq!(loaded.shape(), df.shape());
}

#[test]
fn test_unsupported_input_format_errors() {
    let result = load_dataset(Path::new("data.xlsx"), 10000);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unsupported file format"));
}

#[test]
fn test_missing_file_errors() {
    let result = load_dataset(Path::new("/nonexistent/data.csv"), 10000);
    assert!(result.is_err());
}

#[test]
fn test_save_csv_then_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let mut df = df! {
        "tenure" => [1i64, 2, 3],
        "churn" => [0i64, 1, 0],
    }
    .unwrap();
    save_dataset(&mut df, &path).unwrap();

    let loaded = load_dataset(&path, 10000).unwrap();
    assert_eq!(loaded.shape(), (3, 2));
}

#[test]
fn test_save_unsupported_format_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let mut df = df! { "a" => [1i32] }.unwrap();
    let result = save_dataset(&mut df, &path);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unsupported output format"));
}
