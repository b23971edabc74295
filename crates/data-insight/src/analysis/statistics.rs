//! Descriptive statistics for numeric columns.

use crate::error::Result;
use crate::types::ColumnStats;
use crate::utils::{mean, present_values, quantile_sorted, sample_std, sorted};
use polars::prelude::*;
use tracing::warn;

/// Describe one numeric column over its present values.
pub(crate) fn describe_column(name: &str, series: &Series) -> Result<ColumnStats> {
    let values = present_values(series)?;
    if values.is_empty() {
        warn!("Column '{}' has no present values; reporting no data", name);
    }

    let std = sample_std(&values);
    let avg = mean(&values);
    let ordered = sorted(values);

    Ok(ColumnStats {
        column: name.to_string(),
        count: ordered.len(),
        mean: avg,
        std,
        min: ordered.first().copied(),
        q1: quantile_sorted(&ordered, 0.25),
        median: quantile_sorted(&ordered, 0.5),
        q3: quantile_sorted(&ordered, 0.75),
        max: ordered.last().copied(),
    })
}
