//! Missing-value imputation driven by the declared schema
//!
//! Runs after numeric coercion (so coerced nulls participate in the median)
//! and before winsorization (so quartiles see a complete column).

use anyhow::Result;
use polars::prelude::*;

use super::schema::{has_column, TableSchema};
use super::stats;

/// Sentinel category for missing non-numeric values
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Per-column fill counts from an imputation pass
#[derive(Debug, Clone, Default)]
pub struct ImputeOutcome {
    /// (column, values filled with the column median)
    pub numeric_filled: Vec<(String, usize)>,
    /// (column, values filled with the "Unknown" sentinel)
    pub categorical_filled: Vec<(String, usize)>,
}

impl ImputeOutcome {
    /// Total number of values filled across all columns
    pub fn total_filled(&self) -> usize {
        self.numeric_filled.iter().map(|(_, n)| n).sum::<usize>()
            + self.categorical_filled.iter().map(|(_, n)| n).sum::<usize>()
    }
}

/// Fill missing values in place: declared numeric columns with the column
/// median (recomputed for this table), declared categorical columns with the
/// literal `"Unknown"`. Declared columns absent from the table are skipped.
pub fn impute_missing(df: &mut DataFrame, schema: &TableSchema) -> Result<ImputeOutcome> {
    let mut outcome = ImputeOutcome::default();

    for name in &schema.numeric_present(df) {
        let nulls = df.column(name)?.null_count();
        if nulls == 0 {
            continue;
        }

        let filled: Vec<f64> = {
            let col = df.column(name)?;
            let float = col.cast(&DataType::Float64)?;
            let ca = float.f64()?;
            let median = stats::median(&stats::non_null_values(ca)).ok_or_else(|| {
                anyhow::anyhow!(
                    "Cannot impute numeric column '{}': every value is missing",
                    name
                )
            })?;
            ca.iter().map(|v| v.unwrap_or(median)).collect()
        };

        df.with_column(Series::new(name.as_str().into(), filled))?;
        outcome.numeric_filled.push((name.clone(), nulls));
    }

    for name in &schema.categorical_present(df) {
        let nulls = df.column(name)?.null_count();
        if nulls == 0 {
            continue;
        }

        let filled: Vec<String> = {
            let col = df.column(name)?;
            let strings = col.cast(&DataType::String)?;
            strings
                .str()?
                .iter()
                .map(|v| v.unwrap_or(UNKNOWN_CATEGORY).to_string())
                .collect()
        };

        df.with_column(Series::new(name.as_str().into(), filled))?;
        outcome.categorical_filled.push((name.clone(), nulls));
    }

    Ok(outcome)
}
