//! Configuration types for table loading and analysis.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};

/// Default multiplier applied to the IQR when computing outlier fences.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default number of decimals kept on missing-value percentages.
pub const DEFAULT_PERCENT_DECIMALS: u32 = 2;

/// Default number of rows shown in a table preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Default N for top/bottom category rankings.
pub const DEFAULT_TOP_N: usize = 5;

/// Upper bound on `percent_decimals`; beyond this f64 rounding is noise.
const MAX_PERCENT_DECIMALS: u32 = 10;

/// Markers read as absent values when loading CSV data.
pub const DEFAULT_NULL_VALUES: [&str; 10] = [
    "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "-NaN",
];

/// Configuration for the table analyzer.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use data_insight::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .iqr_multiplier(3.0)
///     .percent_decimals(1)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Multiplier `k` for the outlier fences `Q1 - k*IQR` and `Q3 + k*IQR`.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Decimals kept when rounding missing-value percentages.
    /// Default: 2
    pub percent_decimals: u32,

    /// Number of rows shown by previews.
    /// Default: 5
    pub preview_rows: usize,

    /// N used for top/bottom category rankings when the caller has no preference.
    /// Default: 5
    pub default_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            percent_decimals: DEFAULT_PERCENT_DECIMALS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if self.percent_decimals > MAX_PERCENT_DECIMALS {
            return Err(ConfigValidationError::InvalidPercentDecimals(
                self.percent_decimals,
            ));
        }

        if self.default_top_n == 0 {
            return Err(ConfigValidationError::InvalidTopN(self.default_top_n));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be a finite value above 0.0)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid percent decimals: {0} (must be at most 10)")]
    InvalidPercentDecimals(u32),

    #[error("Invalid default top N: {0} (must be at least 1)")]
    InvalidTopN(usize),
}

impl From<ConfigValidationError> for crate::error::InsightError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::InsightError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    iqr_multiplier: Option<f64>,
    percent_decimals: Option<u32>,
    preview_rows: Option<usize>,
    default_top_n: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the IQR multiplier used for outlier fences.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the number of decimals kept on missing percentages.
    pub fn percent_decimals(mut self, decimals: u32) -> Self {
        self.percent_decimals = Some(decimals);
        self
    }

    /// Set the number of rows shown by previews.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set the default N for category rankings.
    pub fn default_top_n(mut self, n: usize) -> Self {
        self.default_top_n = Some(n);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            iqr_multiplier: self.iqr_multiplier.unwrap_or(DEFAULT_IQR_MULTIPLIER),
            percent_decimals: self.percent_decimals.unwrap_or(DEFAULT_PERCENT_DECIMALS),
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
            default_top_n: self.default_top_n.unwrap_or(DEFAULT_TOP_N),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Options controlling how CSV bytes are parsed into a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field separator. Default: `,`
    pub separator: u8,
    /// Whether the first row holds column names. Default: true
    pub has_header: bool,
    /// Rows sampled for schema inference; `None` scans everything. Default: 100
    ///
    /// When the sampled schema fails on a later row, loading falls back to
    /// scanning every row.
    pub infer_schema_length: Option<usize>,
    /// Cell contents read as absent values (empty cells are always absent).
    pub null_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            has_header: true,
            infer_schema_length: Some(100),
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoadOptions {
    /// Set the field separator.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Set whether the first row is a header.
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the number of rows used for schema inference.
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Replace the absent-value markers.
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }
}
