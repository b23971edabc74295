use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a table column, assigned once when the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point values.
    Numeric,
    /// Anything else: text, booleans, dates and times.
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partition of a table's columns into numeric and categorical names.
///
/// Every column appears in exactly one list, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnClassification {
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.categorical.is_empty()
    }

    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }
}

// ============================================================================
// Descriptive statistics
// ============================================================================

/// Descriptive statistics of one numeric column.
///
/// Computed over present values only. Statistics are `None` when the column
/// has no present values; `std` is also `None` with a single present value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    /// Number of present values.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// 25th percentile.
    pub q1: Option<f64>,
    pub median: Option<f64>,
    /// 75th percentile.
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    /// True when the column had no present values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub columns: Vec<ColumnStats>,
}

impl StatsReport {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == column)
    }

    /// Project onto the simpler mean/min/max variant.
    pub fn to_basic(&self) -> BasicStatsReport {
        BasicStatsReport {
            columns: self
                .columns
                .iter()
                .map(|c| BasicColumnStats {
                    column: c.column.clone(),
                    mean: c.mean,
                    min: c.min,
                    max: c.max,
                })
                .collect(),
        }
    }
}

/// Mean/min/max of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicColumnStats {
    pub column: String,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStatsReport {
    pub columns: Vec<BasicColumnStats>,
}

impl BasicStatsReport {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ============================================================================
// Missing values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub column: String,
    pub missing_count: usize,
    pub missing_percent: f64,
}

/// Columns with at least one absent value, most missing first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingReport {
    pub total_rows: usize,
    pub entries: Vec<MissingEntry>,
}

impl MissingReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_missing(&self) -> usize {
        self.entries.iter().map(|e| e.missing_count).sum()
    }
}

// ============================================================================
// Category aggregates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Direction in which category totals were ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    Descending,
    Ascending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category_column: String,
    pub metric_column: String,
    pub order: RankOrder,
    pub rows: Vec<CategoryTotal>,
}

impl CategoryAggregate {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.category.as_str()).collect()
    }
}

// ============================================================================
// Outliers
// ============================================================================

/// IQR-rule outlier count for one column, with the fences used.
///
/// Fences are `None` when the column had no present values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierEntry {
    pub column: String,
    pub outlier_count: usize,
    pub q1: Option<f64>,
    pub q3: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub entries: Vec<OutlierEntry>,
}

impl OutlierReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&OutlierEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn total_outliers(&self) -> usize {
        self.entries.iter().map(|e| e.outlier_count).sum()
    }
}
