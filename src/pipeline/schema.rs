//! Explicit column schema for the cleaning pipeline
//!
//! The cleaning stages are driven by a declared schema rather than runtime
//! dtype inspection, so behavior does not depend on how a column happened to
//! be inferred on load. Column names are the normalized (lowercase,
//! underscored) forms, since schema validation runs after the rename stage.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a dataset does not satisfy the declared schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The tenure column is required for feature engineering
    #[error("Required tenure column '{0}' not found in dataset")]
    MissingTenureColumn(String),
}

/// Declared column semantics for a churn export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Columns treated as numeric (median imputation, winsorization, scaling)
    pub numeric: Vec<String>,
    /// Columns treated as categorical ("Unknown" imputation, one-hot encoding)
    pub categorical: Vec<String>,
    /// Binary label column (optional in the data; stage skipped when absent)
    pub label: String,
    /// Tenure column used for binning (required)
    pub tenure: String,
    /// Column-name candidates coerced to numeric before imputation
    pub coerce_candidates: Vec<String>,
}

impl Default for TableSchema {
    /// Schema of the standard customer churn export, in normalized names.
    ///
    /// Multi-word columns appear in both naming variants ("TotalCharges" and
    /// "Total Charges" normalize differently); stages skip whichever variant
    /// is absent.
    fn default() -> Self {
        let numeric = ["tenure", "monthly_charges", "monthlycharges", "total_charges", "totalcharges"];
        let categorical = [
            "gender",
            "senior_citizen",
            "seniorcitizen",
            "partner",
            "dependents",
            "phone_service",
            "phoneservice",
            "multiple_lines",
            "multiplelines",
            "internet_service",
            "internetservice",
            "online_security",
            "onlinesecurity",
            "online_backup",
            "onlinebackup",
            "device_protection",
            "deviceprotection",
            "tech_support",
            "techsupport",
            "streaming_tv",
            "streamingtv",
            "streaming_movies",
            "streamingmovies",
            "contract",
            "paperless_billing",
            "paperlessbilling",
            "payment_method",
            "paymentmethod",
            "tenure_bin",
        ];

        Self {
            numeric: numeric.iter().map(|s| s.to_string()).collect(),
            categorical: categorical.iter().map(|s| s.to_string()).collect(),
            label: "churn".to_string(),
            tenure: "tenure".to_string(),
            coerce_candidates: vec!["totalcharges".to_string(), "total_charges".to_string()],
        }
    }
}

impl TableSchema {
    /// Validate that the dataset carries the columns the pipeline cannot run
    /// without. Declared numeric/categorical columns that are absent are
    /// skipped by the stages, not errors; only the tenure column is required.
    pub fn validate(&self, df: &DataFrame) -> Result<(), SchemaError> {
        if !has_column(df, &self.tenure) {
            return Err(SchemaError::MissingTenureColumn(self.tenure.clone()));
        }
        Ok(())
    }

    /// Declared numeric columns that exist in the dataset
    pub fn numeric_present(&self, df: &DataFrame) -> Vec<String> {
        self.numeric
            .iter()
            .filter(|name| has_column(df, name))
            .cloned()
            .collect()
    }

    /// Declared categorical columns that exist in the dataset
    pub fn categorical_present(&self, df: &DataFrame) -> Vec<String> {
        self.categorical
            .iter()
            .filter(|name| has_column(df, name))
            .cloned()
            .collect()
    }
}

/// Check whether a DataFrame contains a column with the given name
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}
