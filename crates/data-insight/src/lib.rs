//! Automatic Insights for Tabular Data
//!
//! A small, stateless analysis library built with Rust and Polars. Given an
//! in-memory table it computes the facts an analyst looks at first.
//!
//! # Overview
//!
//! - **Column Classification**: numeric versus categorical columns
//! - **Descriptive Statistics**: count, mean, std, min, quartiles, max
//! - **Missing Values**: per-column absent counts and percentages
//! - **Category Rankings**: metric totals per category, top-N and bottom-N
//! - **Outliers**: IQR-rule outlier counts per numeric column
//! - **Summaries**: optional plain-English summary from an external service
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use data_insight::{LoadOptions, TableAnalyzer, load_csv_path};
//!
//! let table = load_csv_path("sales.csv", &LoadOptions::default())?;
//! let analyzer = TableAnalyzer::default();
//!
//! let columns = analyzer.detect_column_types(&table);
//! let stats = analyzer.compute_descriptive_stats(&table, &columns.numeric)?;
//! let missing = analyzer.missing_value_summary(&table)?;
//! let top = analyzer.top_categories_by_metric(&table, "region", "revenue", 3)?;
//! let outliers = analyzer.outlier_summary(&table, &columns.numeric)?;
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use data_insight::{AnalysisConfig, TableAnalyzer};
//!
//! let config = AnalysisConfig::builder()
//!     .iqr_multiplier(3.0)       // only flag extreme outliers
//!     .percent_decimals(1)
//!     .build()?;
//! let analyzer = TableAnalyzer::new(config)?;
//! ```
//!
//! # Reports
//!
//! [`ReportGenerator::build_report`] runs every analysis and collects the
//! results in a serializable [`InsightReport`].

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod reporting;
pub mod table;
pub mod types;
pub mod utils;

pub use analysis::TableAnalyzer;
pub use config::{
    AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError, DEFAULT_NULL_VALUES,
    LoadOptions,
};
pub use error::{InsightError, Result, ResultExt};
pub use loader::{load_csv_bytes, load_csv_path};
pub use reporting::{CategoryInsights, CategoryRequest, InsightReport, ReportGenerator};
pub use table::Table;
pub use types::{
    BasicColumnStats, BasicStatsReport, CategoryAggregate, CategoryTotal, ColumnClassification,
    ColumnKind, ColumnStats, MissingEntry, MissingReport, OutlierEntry, OutlierReport, RankOrder,
    StatsReport,
};
