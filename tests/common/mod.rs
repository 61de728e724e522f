//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a messy raw churn export with known defects:
///
/// - unnormalized column names (casing, surrounding/internal spaces)
/// - one exact duplicate row
/// - a text-typed total charges column with a blank value
/// - yes/no label values with mixed casing
pub fn create_raw_churn_dataframe() -> DataFrame {
    df! {
        "Customer ID" => ["C1", "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "C10", "C11"],
        "Tenure" => [1i32, 1, 5, 8, 12, 20, 30, 40, 50, 60, 70, 72],
        "Monthly Charges" => [20.0f64, 20.0, 35.5, 50.0, 55.0, 60.0, 65.0, 70.0, 80.0, 90.0, 100.0, 110.0],
        "TotalCharges" => ["20.0", "20.0", "177.5", "", "660.0", "1200.0", "1950.0", "2800.0", "4000.0", "5400.0", "7000.0", "7920.0"],
        "Contract" => [Some("Month-to-month"), Some("Month-to-month"), Some("One year"), None, Some("Two year"), Some("Month-to-month"), Some("One year"), Some("Two year"), Some("Month-to-month"), Some("One year"), Some("Two year"), Some("Two year")],
        "Churn" => ["No", "No", "Yes", "No", " no ", "YES", "No", "Yes", "No", "No", "Yes", "No"],
    }
    .unwrap()
}

/// The exact worked example from the cleaning contract: three rows, one
/// duplicate, a blank charge value, and a yes/no label.
pub fn create_example_dataframe() -> DataFrame {
    df! {
        "Tenure" => [5i32, 5, 70],
        "TotalCharges" => ["29.85", "29.85", ""],
        "Churn" => ["No", "No", "Yes"],
    }
    .unwrap()
}

/// Create a larger randomized churn table for stress-style tests
pub fn create_large_churn_dataframe(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let tenure: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..=72)).collect();
    let charges: Vec<f64> = (0..rows).map(|_| rng.gen_range(18.0..120.0)).collect();
    let contract: Vec<String> = (0..rows)
        .map(|_| {
            ["Month-to-month", "One year", "Two year"][rng.gen_range(0..3)].to_string()
        })
        .collect();
    let churn: Vec<String> = (0..rows)
        .map(|_| if rng.gen_bool(0.25) { "Yes" } else { "No" }.to_string())
        .collect();

    df! {
        "Tenure" => tenure,
        "Monthly Charges" => charges,
        "Contract" => contract,
        "Churn" => churn,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Collect a column as f64 values, panicking on nulls
pub fn column_as_f64(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .iter()
        .map(|v| v.unwrap())
        .collect()
}

/// Collect a column as strings, panicking on nulls
pub fn column_as_strings(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .cast(&DataType::String)
        .unwrap()
        .str()
        .unwrap()
        .iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}
