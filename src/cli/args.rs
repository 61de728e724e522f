//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::TableSchema;

/// Churnprep - Clean churn datasets and fit a reusable preprocessing transform
#[derive(Parser, Debug)]
#[command(name = "churnprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Binary label column name (normalized form). The label stage is
    /// skipped when the column is absent.
    #[arg(long, default_value = "churn")]
    pub label_column: String,

    /// Tenure column name (normalized form). Required in the dataset.
    #[arg(long, default_value = "tenure")]
    pub tenure_column: String,

    /// Policy for label values that are neither "yes" nor "no".
    /// Options: "strict" (fail loudly, default) or "coerce" (map to 0)
    #[arg(long, default_value = "strict")]
    pub label_policy: String,

    /// Numeric columns (comma-separated, normalized names).
    /// Defaults to the standard churn export schema.
    #[arg(long, value_delimiter = ',')]
    pub numeric_columns: Vec<String>,

    /// Categorical columns (comma-separated, normalized names).
    /// Defaults to the standard churn export schema.
    #[arg(long, value_delimiter = ',')]
    pub categorical_columns: Vec<String>,

    /// Column-name candidates coerced to numeric before imputation
    /// (comma-separated). Defaults to the total-charges naming variants.
    #[arg(long, value_delimiter = ',')]
    pub coerce_columns: Vec<String>,

    /// Minimum distinct-value count for a numeric column to be winsorized.
    /// Near-binary flag columns stay below this and are never clipped.
    #[arg(long, default_value = "10")]
    pub distinct_threshold: usize,

    /// IQR fence multiplier for winsorization
    #[arg(long, default_value = "1.5", allow_negative_numbers = true, value_parser = validate_iqr_multiplier)]
    pub iqr_multiplier: f64,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Cleaned table output path.
    /// Defaults to the input path with a '_clean' suffix.
    #[arg(long)]
    pub cleaned_output: Option<PathBuf>,

    /// Engineered table output path (cleaned table plus tenure_bin).
    /// Defaults to the input path with an '_engineered' suffix.
    #[arg(long)]
    pub engineered_output: Option<PathBuf>,

    /// Fitted preprocessor artifact path.
    /// Defaults to the input path with a '_preprocessor.json' suffix.
    #[arg(long)]
    pub preprocessor_output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a persisted preprocessor to a dataset and write the design matrix
    Apply {
        /// Input file path (CSV or Parquet)
        input: PathBuf,

        /// Fitted preprocessor artifact (JSON)
        preprocessor: PathBuf,

        /// Output file path (optional, defaults to input with '_matrix' suffix)
        output: Option<PathBuf>,

        /// Number of rows to use for schema inference (CSV only)
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },
}

impl Cli {
    /// Build the table schema from defaults and any CLI overrides
    pub fn schema(&self) -> TableSchema {
        let mut schema = TableSchema::default();
        if !self.numeric_columns.is_empty() {
            schema.numeric = self.numeric_columns.clone();
        }
        if !self.categorical_columns.is_empty() {
            schema.categorical = self.categorical_columns.clone();
        }
        if !self.coerce_columns.is_empty() {
            schema.coerce_candidates = self.coerce_columns.clone();
        }
        schema.label = self.label_column.clone();
        schema.tenure = self.tenure_column.clone();
        schema
    }

    /// Cleaned output path, derived from the input if not explicitly provided
    pub fn cleaned_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.cleaned_output
                .clone()
                .unwrap_or_else(|| derive_path(input, "_clean", None)),
        )
    }

    /// Engineered output path, derived from the input if not provided
    pub fn engineered_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.engineered_output
                .clone()
                .unwrap_or_else(|| derive_path(input, "_engineered", None)),
        )
    }

    /// Preprocessor artifact path, derived from the input if not provided
    pub fn preprocessor_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.preprocessor_output
                .clone()
                .unwrap_or_else(|| derive_path(input, "_preprocessor", Some("json"))),
        )
    }
}

/// Derive a sibling path with a stem suffix, optionally forcing an extension
pub fn derive_path(input: &std::path::Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = extension.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
    });
    parent.join(format!("{}{}.{}", stem, suffix, ext))
}

/// Validator for iqr_multiplier parameter
fn validate_iqr_multiplier(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value <= 0.0 {
        Err(format!("iqr_multiplier must be positive, got {}", value))
    } else {
        Ok(value)
    }
}
