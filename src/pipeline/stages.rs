//! Ordered cleaning stage list and runner
//!
//! The cleaning sub-steps have a required execution order (names must be
//! normalized before the schema applies, coercion must precede imputation,
//! imputation must precede winsorization). The order is an explicit list so
//! the contract is visible and testable, not incidental statement order.

use anyhow::Result;
use polars::prelude::*;

use super::coerce::coerce_numeric_columns;
use super::impute::{impute_missing, ImputeOutcome};
use super::label::{normalize_label_column, LabelOutcome, LabelPolicy};
use super::normalize::{deduplicate_rows, normalize_column_names};
use super::schema::TableSchema;
use super::winsorize::{winsorize_outliers, WinsorizeOutcome};

/// One cleaning sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningStage {
    NormalizeNames,
    Deduplicate,
    CoerceNumeric,
    NormalizeLabel,
    ImputeMissing,
    WinsorizeOutliers,
}

impl std::fmt::Display for CleaningStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CleaningStage::NormalizeNames => "normalize column names",
            CleaningStage::Deduplicate => "deduplicate rows",
            CleaningStage::CoerceNumeric => "coerce numeric columns",
            CleaningStage::NormalizeLabel => "normalize label",
            CleaningStage::ImputeMissing => "impute missing values",
            CleaningStage::WinsorizeOutliers => "winsorize outliers",
        };
        write!(f, "{}", name)
    }
}

/// The required stage order
pub const CLEANING_STAGES: [CleaningStage; 6] = [
    CleaningStage::NormalizeNames,
    CleaningStage::Deduplicate,
    CleaningStage::CoerceNumeric,
    CleaningStage::NormalizeLabel,
    CleaningStage::ImputeMissing,
    CleaningStage::WinsorizeOutliers,
];

/// Tunables for a cleaning run
#[derive(Debug, Clone)]
pub struct CleaningOptions {
    pub schema: TableSchema,
    pub label_policy: LabelPolicy,
    /// Minimum distinct-value count for a numeric column to be winsorized
    pub distinct_threshold: usize,
    /// IQR fence multiplier
    pub iqr_multiplier: f64,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            schema: TableSchema::default(),
            label_policy: LabelPolicy::default(),
            distinct_threshold: 10,
            iqr_multiplier: 1.5,
        }
    }
}

/// What each stage did during a cleaning run
#[derive(Debug, Clone, Default)]
pub struct CleaningReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    pub coerced_columns: Vec<String>,
    /// None when the dataset has no label column
    pub label: Option<LabelOutcome>,
    pub imputed: ImputeOutcome,
    pub winsorized: Vec<WinsorizeOutcome>,
}

impl CleaningReport {
    /// Total values clipped across winsorized columns
    pub fn total_clipped(&self) -> usize {
        self.winsorized.iter().map(|w| w.clipped).sum()
    }
}

/// Run the cleaning stages in order over an owned table.
///
/// Schema validation happens immediately after the rename stage, since the
/// schema is declared in normalized names; a missing required column aborts
/// before any further work.
pub fn run_cleaning(
    mut df: DataFrame,
    options: &CleaningOptions,
) -> Result<(DataFrame, CleaningReport)> {
    let mut report = CleaningReport {
        rows_in: df.height(),
        ..Default::default()
    };

    for stage in CLEANING_STAGES {
        match stage {
            CleaningStage::NormalizeNames => {
                normalize_column_names(&mut df)?;
                options.schema.validate(&df)?;
            }
            CleaningStage::Deduplicate => {
                let (deduped, removed) = deduplicate_rows(&df)?;
                df = deduped;
                report.duplicates_removed = removed;
            }
            CleaningStage::CoerceNumeric => {
                report.coerced_columns =
                    coerce_numeric_columns(&mut df, &options.schema.coerce_candidates)?;
            }
            CleaningStage::NormalizeLabel => {
                report.label =
                    normalize_label_column(&mut df, &options.schema.label, options.label_policy)?;
            }
            CleaningStage::ImputeMissing => {
                report.imputed = impute_missing(&mut df, &options.schema)?;
            }
            CleaningStage::WinsorizeOutliers => {
                report.winsorized = winsorize_outliers(
                    &mut df,
                    &options.schema,
                    options.distinct_threshold,
                    options.iqr_multiplier,
                )?;
            }
        }
    }

    report.rows_out = df.height();
    Ok((df, report))
}
