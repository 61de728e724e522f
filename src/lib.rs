//! Churnprep: Churn Dataset Preparation Library
//!
//! A library for preparing customer churn exports for model training:
//! column-name normalization, deduplication, numeric coercion, label
//! normalization, imputation, winsorization, tenure binning, and a
//! persistable standard-scaling + one-hot preprocessing transform.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
