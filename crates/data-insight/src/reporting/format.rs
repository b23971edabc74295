//! Plain-text rendering of analysis results.
//!
//! Used by the CLI output and to feed computed facts into the summary prompt.

use crate::types::{
    BasicStatsReport, CategoryAggregate, ColumnClassification, MissingReport, OutlierReport,
    RankOrder, StatsReport,
};
use crate::utils::{format_stat, truncate_str};
use std::fmt::Write;

const NAME_WIDTH: usize = 20;

/// Render the column classification as two labelled lists.
pub fn format_classification(classification: &ColumnClassification) -> String {
    let list = |names: &[String]| {
        if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        }
    };
    format!(
        "Numeric columns: {}\nCategorical columns: {}",
        list(&classification.numeric),
        list(&classification.categorical)
    )
}

/// Render descriptive statistics, one row per column.
pub fn format_descriptive_stats(report: &StatsReport) -> String {
    if report.is_empty() {
        return "No numeric columns found.".to_string();
    }

    let mut out = format!(
        "{:<20} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for stats in &report.columns {
        let _ = write!(
            out,
            "\n{:<20} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            truncate_str(&stats.column, NAME_WIDTH - 1),
            stats.count,
            format_stat(stats.mean),
            format_stat(stats.std),
            format_stat(stats.min),
            format_stat(stats.q1),
            format_stat(stats.median),
            format_stat(stats.q3),
            format_stat(stats.max),
        );
    }
    out
}

/// Render mean/min/max, one row per column.
pub fn format_basic_stats(report: &BasicStatsReport) -> String {
    if report.is_empty() {
        return "No numeric columns found.".to_string();
    }

    let mut out = format!("{:<20} {:>10} {:>10} {:>10}", "column", "mean", "min", "max");
    for stats in &report.columns {
        let _ = write!(
            out,
            "\n{:<20} {:>10} {:>10} {:>10}",
            truncate_str(&stats.column, NAME_WIDTH - 1),
            format_stat(stats.mean),
            format_stat(stats.min),
            format_stat(stats.max),
        );
    }
    out
}

/// Render the missing-value summary.
pub fn format_missing_summary(report: &MissingReport) -> String {
    if report.is_empty() {
        return "No missing values found.".to_string();
    }

    let mut out = format!("{:<20} {:>14} {:>10}", "column", "missing_count", "missing_%");
    for entry in &report.entries {
        let _ = write!(
            out,
            "\n{:<20} {:>14} {:>10.2}",
            truncate_str(&entry.column, NAME_WIDTH - 1),
            entry.missing_count,
            entry.missing_percent
        );
    }
    out
}

/// Render the outlier summary.
pub fn format_outlier_summary(report: &OutlierReport) -> String {
    if report.is_empty() {
        return "No numeric columns found.".to_string();
    }

    let mut out = format!(
        "{:<20} {:>9} {:>12} {:>12}",
        "column", "outliers", "lower", "upper"
    );
    for entry in &report.entries {
        let _ = write!(
            out,
            "\n{:<20} {:>9} {:>12} {:>12}",
            truncate_str(&entry.column, NAME_WIDTH - 1),
            entry.outlier_count,
            format_stat(entry.lower_bound),
            format_stat(entry.upper_bound),
        );
    }
    out
}

/// Render a category ranking with a heading naming the columns and direction.
pub fn format_category_aggregate(aggregate: &CategoryAggregate) -> String {
    let direction = match aggregate.order {
        RankOrder::Descending => "highest first",
        RankOrder::Ascending => "lowest first",
    };
    let mut out = format!(
        "{} by {} ({})",
        aggregate.metric_column, aggregate.category_column, direction
    );
    if aggregate.is_empty() {
        out.push_str("\n  (no categories)");
        return out;
    }
    for row in &aggregate.rows {
        let _ = write!(
            out,
            "\n  {:<20} {:>14.2}",
            truncate_str(&row.category, NAME_WIDTH - 1),
            row.total
        );
    }
    out
}
