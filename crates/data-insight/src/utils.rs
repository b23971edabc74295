//! Shared utilities for the analysis functions.
//!
//! Every absent-value rule of the library lives here so that all operations
//! apply the same policy:
//! - nulls are absent in every column;
//! - NaN is absent in floating point columns;
//! - statistics and quantiles skip absent values;
//! - category sums treat absent metric values as 0.

use crate::types::ColumnKind;
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a floating point type (and so may hold NaN).
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Map a physical DataType onto the column kind used by the analyzer.
///
/// Booleans, dates, times and text are categorical.
pub fn kind_for_dtype(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

// =============================================================================
// Absent-value Utilities
// =============================================================================

/// Count absent cells of a Series (nulls, plus NaN for float columns).
pub fn absent_count(series: &Series) -> PolarsResult<usize> {
    if !is_float_dtype(series.dtype()) {
        return Ok(series.null_count());
    }

    let casted = series.cast(&DataType::Float64)?;
    let count = casted
        .f64()?
        .into_iter()
        .filter(|v| v.is_none_or(f64::is_nan))
        .count();
    Ok(count)
}

/// Collect present values of a numeric Series as f64, in row order.
pub fn present_values(series: &Series) -> PolarsResult<Vec<f64>> {
    let casted = series.cast(&DataType::Float64)?;
    let values = casted
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    Ok(values)
}

/// Collect numeric values in row order with absent values read as 0.
pub fn values_or_zero(series: &Series) -> PolarsResult<Vec<f64>> {
    let casted = series.cast(&DataType::Float64)?;
    let values = casted
        .f64()?
        .into_iter()
        .map(|v| match v {
            Some(val) if !val.is_nan() => val,
            _ => 0.0,
        })
        .collect();
    Ok(values)
}

/// Render each cell of a Series as a grouping key; absent cells are `None`.
pub fn category_keys(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let float_nan_mask: Option<Vec<bool>> = if is_float_dtype(series.dtype()) {
        let casted = series.cast(&DataType::Float64)?;
        Some(
            casted
                .f64()?
                .into_iter()
                .map(|v| v.is_some_and(f64::is_nan))
                .collect(),
        )
    } else {
        None
    };

    let casted = series.cast(&DataType::String)?;
    let keys = casted
        .str()?
        .into_iter()
        .enumerate()
        .map(|(idx, v)| {
            let is_nan = float_nan_mask
                .as_ref()
                .and_then(|mask| mask.get(idx).copied())
                .unwrap_or(false);
            if is_nan { None } else { v.map(str::to_string) }
        })
        .collect();
    Ok(keys)
}

// =============================================================================
// Numeric Utilities
// =============================================================================

/// Sort values ascending; NaN never reaches here (see [`present_values`]).
pub fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Quantile of sorted values using linear interpolation between closest ranks.
///
/// Returns `None` for an empty slice.
pub fn quantile_sorted(values: &[f64], quantile: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let pos = quantile.clamp(0.0, 1.0) * (values.len() as f64 - 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(values[lower]);
    }
    let weight = pos - lower as f64;
    Some(values[lower] + (values[upper] - values[lower]) * weight)
}

/// Arithmetic mean, `None` for no values.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1), `None` below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    Some(variance.sqrt())
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format an optional statistic for text output.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

/// Truncate a string to max characters with ellipsis.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// =============================================================================
// Tests
// =============================================================================
