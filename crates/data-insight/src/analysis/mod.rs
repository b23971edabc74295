//! Table analysis module.
//!
//! [`TableAnalyzer`] exposes every analysis operation as a pure function of
//! a [`Table`] and a few parameters:
//! - column classification
//! - descriptive statistics (full and mean/min/max)
//! - missing-value summary
//! - category rankings by a summed metric
//! - IQR outlier summary
//!
//! The analyzer only holds an immutable [`AnalysisConfig`]; no state is kept
//! between calls, so one analyzer can be shared across threads.

mod categories;
mod missing;
mod outliers;
mod statistics;

use crate::config::AnalysisConfig;
use crate::error::{InsightError, Result};
use crate::table::Table;
use crate::types::{
    BasicStatsReport, CategoryAggregate, ColumnClassification, ColumnKind, MissingReport,
    OutlierReport, RankOrder, StatsReport,
};
use tracing::debug;

/// Stateless analyzer over in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct TableAnalyzer {
    config: AnalysisConfig,
}

impl TableAnalyzer {
    /// Create an analyzer with a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Partition the table's columns into numeric and categorical names.
    ///
    /// Both lists keep table order; every column appears in exactly one.
    pub fn detect_column_types(&self, table: &Table) -> ColumnClassification {
        let mut classification = ColumnClassification::default();
        for (name, kind) in table.columns_with_kinds() {
            match kind {
                ColumnKind::Numeric => classification.numeric.push(name.to_string()),
                ColumnKind::Categorical => classification.categorical.push(name.to_string()),
            }
        }
        debug!(
            "Classified {} numeric and {} categorical columns",
            classification.numeric.len(),
            classification.categorical.len()
        );
        classification
    }

    /// Count, mean, std, min, quartiles and max of each named numeric column.
    ///
    /// Absent values are skipped. An empty name list gives an empty report.
    /// A column with no present values reports `count = 0` and no statistics.
    ///
    /// # Errors
    ///
    /// [`InsightError::InvalidColumn`] if a name is unknown or not numeric.
    pub fn compute_descriptive_stats<S: AsRef<str>>(
        &self,
        table: &Table,
        numeric_names: &[S],
    ) -> Result<StatsReport> {
        let mut columns = Vec::with_capacity(numeric_names.len());
        for name in numeric_names {
            let name = name.as_ref();
            let series = table.numeric_series(name)?;
            columns.push(statistics::describe_column(name, series)?);
        }
        debug!("Computed descriptive stats for {} columns", columns.len());
        Ok(StatsReport { columns })
    }

    /// Mean, min and max of each named numeric column.
    ///
    /// Same absent-value and error policy as
    /// [`compute_descriptive_stats`](Self::compute_descriptive_stats).
    pub fn compute_basic_stats<S: AsRef<str>>(
        &self,
        table: &Table,
        numeric_names: &[S],
    ) -> Result<BasicStatsReport> {
        Ok(self
            .compute_descriptive_stats(table, numeric_names)?
            .to_basic())
    }

    /// Absent-value count and percentage for every column with at least one.
    ///
    /// Ordered by count descending, ties in column order. A zero-row table
    /// gives an empty report.
    pub fn missing_value_summary(&self, table: &Table) -> Result<MissingReport> {
        missing::summarize(table, self.config.percent_decimals)
    }

    /// Sum `value_col` per distinct value of `category_col`, largest first.
    ///
    /// Absent metric values count as 0; rows with an absent category are left
    /// out. Equal totals keep the order in which categories first appear.
    ///
    /// # Errors
    ///
    /// [`InsightError::InvalidColumn`] if either column is unknown or
    /// `value_col` is not numeric.
    pub fn revenue_by_category(
        &self,
        table: &Table,
        category_col: &str,
        value_col: &str,
    ) -> Result<CategoryAggregate> {
        categories::rank(table, category_col, value_col, RankOrder::Descending, None)
    }

    /// The `top_n` categories with the largest summed metric.
    ///
    /// # Errors
    ///
    /// As [`revenue_by_category`](Self::revenue_by_category), plus
    /// [`InsightError::InvalidArgument`] when `top_n` is 0.
    pub fn top_categories_by_metric(
        &self,
        table: &Table,
        category_col: &str,
        metric_col: &str,
        top_n: usize,
    ) -> Result<CategoryAggregate> {
        ensure_positive("top_n", top_n)?;
        categories::rank(
            table,
            category_col,
            metric_col,
            RankOrder::Descending,
            Some(top_n),
        )
    }

    /// The `bottom_n` categories with the smallest summed metric, smallest first.
    pub fn bottom_categories_by_metric(
        &self,
        table: &Table,
        category_col: &str,
        metric_col: &str,
        bottom_n: usize,
    ) -> Result<CategoryAggregate> {
        ensure_positive("bottom_n", bottom_n)?;
        categories::rank(
            table,
            category_col,
            metric_col,
            RankOrder::Ascending,
            Some(bottom_n),
        )
    }

    /// Count values outside the IQR fences of each named numeric column.
    ///
    /// Every requested column is reported, in request order. A column with no
    /// present values reports 0 outliers and no fences; a constant column has
    /// IQR 0, so only values unequal to the constant would count.
    pub fn outlier_summary<S: AsRef<str>>(
        &self,
        table: &Table,
        numeric_names: &[S],
    ) -> Result<OutlierReport> {
        let mut entries = Vec::with_capacity(numeric_names.len());
        for name in numeric_names {
            let name = name.as_ref();
            let series = table.numeric_series(name)?;
            entries.push(outliers::count_outliers(
                name,
                series,
                self.config.iqr_multiplier,
            )?);
        }
        Ok(OutlierReport { entries })
    }
}

fn ensure_positive(argument: &str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(InsightError::InvalidArgument(format!(
            "{} must be a positive integer",
            argument
        )));
    }
    Ok(())
}

static_assertions::assert_impl_all!(TableAnalyzer: Send, Sync);
static_assertions::assert_impl_all!(Table: Send, Sync);
