//! Fitted preprocessing transform: standard scaling + one-hot encoding
//!
//! Fit once on a training table, persisted as JSON, and reused unmodified by
//! downstream training and inference. Applying the transform never mutates
//! the fitted state: unseen categories encode as all zeros and the vocabulary
//! never grows.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::stats;

/// Standardization parameters for one numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericScaler {
    pub column: String,
    pub mean: f64,
    /// Divisor applied after centering; 1.0 for zero-variance columns
    pub scale: f64,
}

/// One-hot vocabulary for one categorical column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEncoder {
    pub column: String,
    /// Distinct observed categories, sorted; index is the one-hot position
    pub categories: Vec<String>,
}

/// Metadata about the fit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessorMetadata {
    /// Timestamp of the fit (ISO 8601 format)
    pub fitted_at: String,
    /// Churnprep version
    pub churnprep_version: String,
    /// Row count of the table the transform was fitted on
    pub fitted_rows: usize,
}

/// A fitted column transform: per-numeric-column standardization parameters
/// and per-categorical-column one-hot vocabularies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preprocessor {
    pub metadata: PreprocessorMetadata,
    pub numeric: Vec<NumericScaler>,
    pub categorical: Vec<CategoryEncoder>,
}

impl Preprocessor {
    /// Fit the transform on a table. Every declared column must be present;
    /// a missing column is a fatal error, since the transform's output layout
    /// depends on it.
    pub fn fit(df: &DataFrame, numeric: &[String], categorical: &[String]) -> Result<Self> {
        let mut scalers = Vec::with_capacity(numeric.len());
        for name in numeric {
            let col = df.column(name).with_context(|| {
                format!("Numeric column '{}' required to fit the preprocessor", name)
            })?;
            let float = col.cast(&DataType::Float64)?;
            let values = stats::non_null_values(float.f64()?);

            let mean = stats::mean(&values).ok_or_else(|| {
                anyhow::anyhow!("Numeric column '{}' has no non-missing values", name)
            })?;
            let std = stats::population_std(&values, mean);
            // Zero variance scales by identity instead of dividing by zero
            let scale = if std > 0.0 { std } else { 1.0 };

            scalers.push(NumericScaler {
                column: name.clone(),
                mean,
                scale,
            });
        }

        let mut encoders = Vec::with_capacity(categorical.len());
        for name in categorical {
            let col = df.column(name).with_context(|| {
                format!(
                    "Categorical column '{}' required to fit the preprocessor",
                    name
                )
            })?;
            let strings = col.cast(&DataType::String)?;

            let mut categories: Vec<String> = strings
                .str()?
                .iter()
                .flatten()
                .map(|s| s.to_string())
                .collect();
            categories.sort();
            categories.dedup();

            encoders.push(CategoryEncoder {
                column: name.clone(),
                categories,
            });
        }

        Ok(Self {
            metadata: PreprocessorMetadata {
                fitted_at: Utc::now().to_rfc3339(),
                churnprep_version: env!("CARGO_PKG_VERSION").to_string(),
                fitted_rows: df.height(),
            },
            numeric: scalers,
            categorical: encoders,
        })
    }

    /// Apply the fitted transform to a table.
    ///
    /// Output row order matches input row order. Output columns are the
    /// numeric columns in fitted order, then one one-hot group per
    /// categorical column in fitted order (vocabulary order within a group).
    /// Columns of the input not covered by the transform are dropped.
    /// Categories unseen at fit time (and nulls) encode as all zeros.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.output_width());

        for scaler in &self.numeric {
            let col = df.column(&scaler.column).with_context(|| {
                format!(
                    "Numeric column '{}' required to apply the preprocessor",
                    scaler.column
                )
            })?;
            let float = col.cast(&DataType::Float64)?;
            let standardized: Vec<Option<f64>> = float
                .f64()?
                .iter()
                .map(|v| v.map(|x| (x - scaler.mean) / scaler.scale))
                .collect();
            columns.push(Column::new(scaler.column.as_str().into(), standardized));
        }

        for encoder in &self.categorical {
            let col = df.column(&encoder.column).with_context(|| {
                format!(
                    "Categorical column '{}' required to apply the preprocessor",
                    encoder.column
                )
            })?;
            let strings = col.cast(&DataType::String)?;

            // Position of each row's category in the fitted vocabulary;
            // None for nulls and unseen categories
            let positions: Vec<Option<usize>> = strings
                .str()?
                .iter()
                .map(|v| {
                    v.and_then(|s| {
                        encoder
                            .categories
                            .binary_search_by(|c| c.as_str().cmp(s))
                            .ok()
                    })
                })
                .collect();

            for (idx, category) in encoder.categories.iter().enumerate() {
                let one_hot: Vec<f64> = positions
                    .iter()
                    .map(|p| if *p == Some(idx) { 1.0 } else { 0.0 })
                    .collect();
                columns.push(Column::new(
                    format!("{}_{}", encoder.column, category).into(),
                    one_hot,
                ));
            }
        }

        DataFrame::new(columns).context("Failed to assemble transformed output")
    }

    /// Names of the output columns, in output order
    pub fn output_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = self.numeric.iter().map(|s| s.column.clone()).collect();
        for encoder in &self.categorical {
            for category in &encoder.categories {
                names.push(format!("{}_{}", encoder.column, category));
            }
        }
        names
    }

    /// Width of the transformed output
    pub fn output_width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|e| e.categories.len())
                .sum::<usize>()
    }

    /// Persist the fitted transform as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize preprocessor to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write preprocessor to {}", path.display()))?;
        Ok(())
    }

    /// Load a persisted transform
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preprocessor from {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse preprocessor file {}", path.display()))
    }
}
