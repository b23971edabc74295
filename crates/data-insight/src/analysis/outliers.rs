//! IQR-rule outlier counting.
//!
//! Quartiles use linear interpolation over the present values, so columns
//! with one to three values still get defined fences. A column without
//! present values reports 0 outliers and no fences.

use crate::error::Result;
use crate::types::OutlierEntry;
use crate::utils::{present_values, quantile_sorted, sorted};
use polars::prelude::*;
use tracing::debug;

/// Count present values strictly outside `[Q1 - k*IQR, Q3 + k*IQR]`.
pub(crate) fn count_outliers(name: &str, series: &Series, multiplier: f64) -> Result<OutlierEntry> {
    let values = sorted(present_values(series)?);

    let (Some(q1), Some(q3)) = (
        quantile_sorted(&values, 0.25),
        quantile_sorted(&values, 0.75),
    ) else {
        debug!("Column '{}' has no present values; no outliers", name);
        return Ok(OutlierEntry {
            column: name.to_string(),
            outlier_count: 0,
            q1: None,
            q3: None,
            lower_bound: None,
            upper_bound: None,
        });
    };

    let iqr = q3 - q1;
    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;

    let outlier_count = values
        .iter()
        .filter(|v| **v < lower_bound || **v > upper_bound)
        .count();

    Ok(OutlierEntry {
        column: name.to_string(),
        outlier_count,
        q1: Some(q1),
        q3: Some(q3),
        lower_bound: Some(lower_bound),
        upper_bound: Some(upper_bound),
    })
}
