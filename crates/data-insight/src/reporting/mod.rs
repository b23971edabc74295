//! Report generation module.
//!
//! This module assembles every analysis result for a table into one
//! serializable [`InsightReport`] and renders reports as plain text.
//!
//! # Example
//!
//! ```rust,ignore
//! use data_insight::reporting::{CategoryRequest, ReportGenerator};
//! use data_insight::TableAnalyzer;
//!
//! let analyzer = TableAnalyzer::default();
//! let request = CategoryRequest::new("region", "sales", 5);
//! let report = ReportGenerator::build_report(&analyzer, &table, Some("sales.csv"), Some(&request))?;
//!
//! // Print as JSON
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! // Or write to file
//! let generator = ReportGenerator::new(PathBuf::from("output"));
//! generator.write_report_to_file(&report, "sales")?;
//! ```

mod format;
mod generator;

pub use format::{
    format_basic_stats, format_category_aggregate, format_classification, format_descriptive_stats,
    format_missing_summary, format_outlier_summary,
};
pub use generator::{CategoryInsights, CategoryRequest, InsightReport, ReportGenerator};
