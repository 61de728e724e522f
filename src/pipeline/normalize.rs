//! Column-name normalization and row deduplication

use anyhow::Result;
use polars::prelude::*;

/// Normalize every column name: trim surrounding whitespace, lowercase, and
/// replace internal spaces with underscores. Idempotent.
pub fn normalize_column_names(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_lowercase().replace(' ', "_"))
        .collect();

    df.set_column_names(names)?;
    Ok(())
}

/// Remove exact-duplicate rows (all columns equal), keeping the first
/// occurrence and preserving the order of the surviving rows.
///
/// Returns the deduplicated DataFrame and the number of rows removed.
pub fn deduplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let before = df.height();
    let deduped = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    let removed = before - deduped.height();
    Ok((deduped, removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_names() {
        let mut df = df! {
            " Total Charges " => [1.0f64],
            "MonthlyCharges" => [2.0f64],
        }
        .unwrap();

        normalize_column_names(&mut df).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["total_charges", "monthlycharges"]);
    }

    #[test]
    fn test_normalize_names_idempotent() {
        let mut df = df! {
            "Customer ID" => [1i32],
            " Churn" => [0i32],
        }
        .unwrap();

        normalize_column_names(&mut df).unwrap();
        let first: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        normalize_column_names(&mut df).unwrap();
        let second: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_deduplicate_keeps_first() {
        let df = df! {
            "a" => [1i32, 1, 2, 1],
            "b" => ["x", "x", "y", "x"],
        }
        .unwrap();

        let (deduped, removed) = deduplicate_rows(&df).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(deduped.height(), 2);

        let a: Vec<i32> = deduped
            .column("a")
            .unwrap()
            .i32()
            .unwrap()
            .iter()
            .flatten()
            .collect();
        assert_eq!(a, vec![1, 2]);
    }

    #[test]
    fn test_deduplicate_no_duplicates() {
        let df = df! {
            "a" => [1i32, 2, 3],
        }
        .unwrap();

        let (deduped, removed) = deduplicate_rows(&df).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(deduped.height(), 3);
    }
}
