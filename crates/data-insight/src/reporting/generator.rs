use crate::analysis::TableAnalyzer;
use crate::error::Result;
use crate::table::Table;
use crate::types::{CategoryAggregate, ColumnClassification, MissingReport, OutlierReport, StatsReport};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

// ============================================================================
// Report Types
// ============================================================================

/// Every insight computed for one table.
///
/// Use this for both JSON output (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path or name of the input, when known
    pub input_file: Option<String>,
    /// (rows, columns)
    pub shape: (usize, usize),
    pub columns: ColumnClassification,
    pub descriptive_stats: StatsReport,
    pub missing_values: MissingReport,
    pub outliers: OutlierReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_insights: Option<CategoryInsights>,
    /// Natural-language summary, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Category rankings for one (category, metric) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInsights {
    /// All categories, largest total first.
    pub ranking: CategoryAggregate,
    pub top: CategoryAggregate,
    pub bottom: CategoryAggregate,
}

/// Which category/metric pair to rank, and how many to keep at each end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub category_column: String,
    pub metric_column: String,
    pub n: usize,
}

impl CategoryRequest {
    pub fn new(category: impl Into<String>, metric: impl Into<String>, n: usize) -> Self {
        Self {
            category_column: category.into(),
            metric_column: metric.into(),
            n,
        }
    }
}

// ============================================================================
// Report Generator
// ============================================================================

pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
        }
    }
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Run every analysis on the table and collect the results.
    ///
    /// Descriptive statistics and outliers cover all numeric columns. A table
    /// without numeric columns yields empty sections, not an error.
    pub fn build_report(
        analyzer: &TableAnalyzer,
        table: &Table,
        input_file: Option<&str>,
        category: Option<&CategoryRequest>,
    ) -> Result<InsightReport> {
        let columns = analyzer.detect_column_types(table);
        let descriptive_stats = analyzer.compute_descriptive_stats(table, &columns.numeric)?;
        let missing_values = analyzer.missing_value_summary(table)?;
        let outliers = analyzer.outlier_summary(table, &columns.numeric)?;

        let category_insights = match category {
            Some(request) => Some(Self::build_category_insights(analyzer, table, request)?),
            None => None,
        };

        debug!(
            "Built report: {} stats, {} missing entries, {} outlier entries",
            descriptive_stats.columns.len(),
            missing_values.entries.len(),
            outliers.entries.len()
        );

        Ok(InsightReport {
            generated_at: Local::now().to_rfc3339(),
            input_file: input_file.map(str::to_string),
            shape: table.shape(),
            columns,
            descriptive_stats,
            missing_values,
            outliers,
            category_insights,
            summary: None,
        })
    }

    fn build_category_insights(
        analyzer: &TableAnalyzer,
        table: &Table,
        request: &CategoryRequest,
    ) -> Result<CategoryInsights> {
        let category = request.category_column.as_str();
        let metric = request.metric_column.as_str();
        Ok(CategoryInsights {
            ranking: analyzer.revenue_by_category(table, category, metric)?,
            top: analyzer.top_categories_by_metric(table, category, metric, request.n)?,
            bottom: analyzer.bottom_categories_by_metric(table, category, metric, request.n)?,
        })
    }

    /// Write the report as pretty JSON to `<output_dir>/<base_name>_insight.json`.
    pub fn write_report_to_file(&self, report: &InsightReport, base_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self.output_dir.join(format!("{}_insight.json", base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
