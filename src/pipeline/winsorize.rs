//! IQR-based outlier winsorization
//!
//! Extreme values are clipped to the derived fences, not removed, so the row
//! count is unaffected. Columns with few distinct values (near-binary flags)
//! are excluded from clipping.

use anyhow::Result;
use polars::prelude::*;

use super::schema::TableSchema;
use super::stats;

/// Fences and clip count for one winsorized column
#[derive(Debug, Clone)]
pub struct WinsorizeOutcome {
    pub column: String,
    /// Lower fence: Q1 - k * IQR
    pub lower: f64,
    /// Upper fence: Q3 + k * IQR
    pub upper: f64,
    /// Number of values moved onto a fence
    pub clipped: usize,
}

/// Clip every value of each qualifying declared numeric column into
/// [Q1 - k*IQR, Q3 + k*IQR], where quartiles use linear interpolation.
/// A column qualifies when its distinct non-null value count exceeds
/// `distinct_threshold`.
pub fn winsorize_outliers(
    df: &mut DataFrame,
    schema: &TableSchema,
    distinct_threshold: usize,
    iqr_multiplier: f64,
) -> Result<Vec<WinsorizeOutcome>> {
    let mut outcomes = Vec::new();

    for name in &schema.numeric_present(df) {
        let result: Option<(Vec<Option<f64>>, f64, f64, usize)> = {
            let col = df.column(name)?;
            let float = col.cast(&DataType::Float64)?;
            let ca = float.f64()?;
            let values = stats::non_null_values(ca);

            let mut distinct = values.clone();
            distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            distinct.dedup();

            if distinct.len() <= distinct_threshold {
                None
            } else {
                // Quartiles over the pre-clip column; imputation has already run
                let q1 = stats::quantile(&values, 0.25).unwrap_or(0.0);
                let q3 = stats::quantile(&values, 0.75).unwrap_or(0.0);
                let iqr = q3 - q1;
                let lower = q1 - iqr_multiplier * iqr;
                let upper = q3 + iqr_multiplier * iqr;

                let mut clipped = 0usize;
                let clipped_values: Vec<Option<f64>> = ca
                    .iter()
                    .map(|v| {
                        v.map(|x| {
                            if x < lower {
                                clipped += 1;
                                lower
                            } else if x > upper {
                                clipped += 1;
                                upper
                            } else {
                                x
                            }
                        })
                    })
                    .collect();

                Some((clipped_values, lower, upper, clipped))
            }
        };

        if let Some((values, lower, upper, clipped)) = result {
            df.with_column(Series::new(name.as_str().into(), values))?;
            outcomes.push(WinsorizeOutcome {
                column: name.clone(),
                lower,
                upper,
                clipped,
            });
        }
    }

    Ok(outcomes)
}
