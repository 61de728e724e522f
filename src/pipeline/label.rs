//! Label column normalization
//!
//! Maps the "yes"/"no" churn label to integer 0/1. The handling of
//! unrecognized tokens is an explicit, named policy rather than a silent
//! default: strict mode fails with the offending value, coerce mode maps it
//! to 0 and reports how many values were coerced.

use anyhow::Result;
use polars::prelude::*;

use super::schema::has_column;

/// Policy for label values that are neither "yes" nor "no"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Fail with a descriptive error on the first unrecognized token
    #[default]
    Strict,
    /// Map unrecognized tokens to 0 and count them
    Coerce,
}

impl std::fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelPolicy::Strict => write!(f, "strict"),
            LabelPolicy::Coerce => write!(f, "coerce"),
        }
    }
}

impl std::str::FromStr for LabelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(LabelPolicy::Strict),
            "coerce" => Ok(LabelPolicy::Coerce),
            _ => Err(format!(
                "Unknown label policy: '{}'. Use 'strict' or 'coerce'.",
                s
            )),
        }
    }
}

/// Counts gathered while normalizing the label column
#[derive(Debug, Clone, Default)]
pub struct LabelOutcome {
    /// Values mapped to 1
    pub positives: usize,
    /// Values mapped to 0
    pub negatives: usize,
    /// Missing values defaulted to 0
    pub null_defaults: usize,
    /// Unrecognized tokens coerced to 0 (coerce policy only)
    pub coerced: usize,
}

/// Normalize the label column to integer 0/1 in place.
///
/// Tokens are trimmed and lowercased before matching: "yes" maps to 1 and
/// "no" maps to 0. True nulls become 0 under both policies. Returns `None`
/// when the label column is absent (the stage is a no-op).
pub fn normalize_label_column(
    df: &mut DataFrame,
    label: &str,
    policy: LabelPolicy,
) -> Result<Option<LabelOutcome>> {
    if !has_column(df, label) {
        return Ok(None);
    }

    let values: Vec<Option<String>> = {
        let col = df.column(label)?;
        let strings = col.cast(&DataType::String)?;
        strings
            .str()?
            .iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect()
    };

    let mut outcome = LabelOutcome::default();
    let mut encoded: Vec<i32> = Vec::with_capacity(values.len());

    for value in &values {
        match value {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "yes" => {
                    outcome.positives += 1;
                    encoded.push(1);
                }
                "no" => {
                    outcome.negatives += 1;
                    encoded.push(0);
                }
                other => match policy {
                    LabelPolicy::Strict => anyhow::bail!(
                        "Unrecognized value '{}' in label column '{}'. Expected 'yes' or 'no'; \
                         rerun with --label-policy coerce to map unknown values to 0.",
                        other,
                        label
                    ),
                    LabelPolicy::Coerce => {
                        outcome.coerced += 1;
                        outcome.negatives += 1;
                        encoded.push(0);
                    }
                },
            },
            None => {
                outcome.null_defaults += 1;
                outcome.negatives += 1;
                encoded.push(0);
            }
        }
    }

    df.with_column(Series::new(label.into(), encoded))?;
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_mapping() {
        let mut df = df! {
            "churn" => ["Yes", " no ", "YES", "No"],
        }
        .unwrap();

        let outcome = normalize_label_column(&mut df, "churn", LabelPolicy::Strict)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.positives, 2);
        assert_eq!(outcome.negatives, 2);

        let values: Vec<i32> = df
            .column("churn")
            .unwrap()
            .i32()
            .unwrap()
            .iter()
            .flatten()
            .collect();
        assert_eq!(values, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_strict_rejects_unknown_token() {
        let mut df = df! {
            "churn" => ["yes", "maybe"],
        }
        .unwrap();

        let result = normalize_label_column(&mut df, "churn", LabelPolicy::Strict);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maybe"));
    }

    #[test]
    fn test_coerce_counts_unknown_tokens() {
        let mut df = df! {
            "churn" => ["yes", "maybe", "no"],
        }
        .unwrap();

        let outcome = normalize_label_column(&mut df, "churn", LabelPolicy::Coerce)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.coerced, 1);

        let values: Vec<i32> = df
            .column("churn")
            .unwrap()
            .i32()
            .unwrap()
            .iter()
            .flatten()
            .collect();
        assert_eq!(values, vec![1, 0, 0]);
    }

    #[test]
    fn test_nulls_default_to_zero_under_strict() {
        let mut df = df! {
            "churn" => [Some("yes"), None, Some("no")],
        }
        .unwrap();

        let outcome = normalize_label_column(&mut df, "churn", LabelPolicy::Strict)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.null_defaults, 1);
        assert_eq!(df.column("churn").unwrap().null_count(), 0);
    }

    #[test]
    fn test_absent_label_is_noop() {
        let mut df = df! {
            "tenure" => [1i32, 2],
        }
        .unwrap();

        let outcome = normalize_label_column(&mut df, "churn", LabelPolicy::Strict).unwrap();
        assert!(outcome.is_none());
        assert_eq!(df.width(), 1);
    }
}
