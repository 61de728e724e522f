//! Numeric coercion for text-typed charge columns
//!
//! Charge fields in churn exports frequently arrive as strings with blanks or
//! stray whitespace. Coercion runs before imputation so that values which
//! fail to parse participate in median computation as missing.

use anyhow::Result;
use polars::prelude::*;

use super::schema::has_column;

/// Parse each candidate column to `f64`. Values that fail to parse become
/// null rather than errors. Candidates absent from the dataset are skipped.
///
/// Returns the names of the columns that were coerced.
pub fn coerce_numeric_columns(df: &mut DataFrame, candidates: &[String]) -> Result<Vec<String>> {
    let mut coerced = Vec::new();

    for name in candidates {
        if !has_column(df, name) {
            continue;
        }

        let parsed: Vec<Option<f64>> = {
            let col = df.column(name)?;
            if col.dtype().is_primitive_numeric() {
                let float = col.cast(&DataType::Float64)?;
                float.f64()?.iter().collect()
            } else {
                let strings = col.cast(&DataType::String)?;
                strings
                    .str()?
                    .iter()
                    .map(|value| value.and_then(|s| s.trim().parse::<f64>().ok()))
                    .collect()
            }
        };

        df.with_column(Series::new(name.as_str().into(), parsed))?;
        coerced.push(name.clone());
    }

    Ok(coerced)
}
