//! Tenure binning
//!
//! Partitions the tenure column into labeled half-open ranges. Boundary
//! values above the observed maximum are dropped before label generation so
//! no zero-width or empty trailing bins are produced.

use anyhow::{Context, Result};
use polars::prelude::*;

use super::impute::UNKNOWN_CATEGORY;

/// Fixed tenure boundaries; the observed maximum is appended at bin time
pub const TENURE_BOUNDARIES: [i64; 6] = [-1, 6, 12, 24, 48, 72];

/// Name of the derived bin column
pub const TENURE_BIN_COLUMN: &str = "tenure_bin";

/// Edges, labels, and out-of-range count from a binning pass
#[derive(Debug, Clone)]
pub struct BinningOutcome {
    pub edges: Vec<i64>,
    pub labels: Vec<String>,
    /// Values outside the boundary range, mapped to "Unknown"
    pub out_of_range: usize,
}

/// Build the deduplicated, sorted edge set for an observed maximum.
/// Fixed boundaries at or above the maximum are dropped; the maximum itself
/// closes the final bin.
pub fn tenure_bin_edges(max: i64) -> Vec<i64> {
    let mut edges: Vec<i64> = TENURE_BOUNDARIES
        .iter()
        .copied()
        .filter(|b| *b < max)
        .collect();
    edges.push(max);
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Generate "low-high" labels for each adjacent edge pair, where low is the
/// previous edge plus one and high is the current edge.
pub fn tenure_bin_labels(edges: &[i64]) -> Vec<String> {
    edges
        .windows(2)
        .map(|pair| format!("{}-{}", pair[0] + 1, pair[1]))
        .collect()
}

/// Index of the bin containing `value`, if any. The lowest bin includes its
/// lower boundary; every other bin is half-open (previous edge, edge].
fn assign_bin(value: f64, edges: &[i64]) -> Option<usize> {
    if value < edges[0] as f64 {
        return None;
    }
    for i in 1..edges.len() {
        if value <= edges[i] as f64 {
            return Some(i - 1);
        }
    }
    None
}

/// Append the `tenure_bin` column derived from the tenure column.
///
/// Tenure values outside the boundary range (and any residual nulls) map to
/// `"Unknown"` rather than erroring; binning runs after imputation, so an
/// out-of-range value indicates upstream schema misuse, which is surfaced in
/// the returned count.
pub fn bin_tenure(df: &mut DataFrame, tenure: &str) -> Result<BinningOutcome> {
    let (assigned, edges, labels, out_of_range) = {
        let col = df
            .column(tenure)
            .with_context(|| format!("Tenure column '{}' not found in dataset", tenure))?;
        let float = col.cast(&DataType::Float64)?;
        let ca = float.f64()?;

        let max = ca.iter().flatten().fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            anyhow::bail!("Tenure column '{}' has no non-missing values", tenure);
        }

        let edges = tenure_bin_edges(max.ceil() as i64);
        if edges.len() < 2 {
            anyhow::bail!(
                "Cannot bin tenure column '{}': observed maximum {} leaves no bin range",
                tenure,
                max
            );
        }
        let labels = tenure_bin_labels(&edges);

        let mut out_of_range = 0usize;
        let assigned: Vec<String> = ca
            .iter()
            .map(|v| match v.and_then(|x| assign_bin(x, &edges)) {
                Some(idx) => labels[idx].clone(),
                None => {
                    out_of_range += 1;
                    UNKNOWN_CATEGORY.to_string()
                }
            })
            .collect();

        (assigned, edges, labels, out_of_range)
    };

    df.with_column(Series::new(TENURE_BIN_COLUMN.into(), assigned))?;

    Ok(BinningOutcome {
        edges,
        labels,
        out_of_range,
    })
}
