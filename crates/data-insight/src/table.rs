//! The in-memory table analysed by [`crate::TableAnalyzer`].
//!
//! A [`Table`] is a polars [`DataFrame`] together with one [`ColumnKind`] per
//! column. Kinds are assigned once when the table is built and never
//! re-inferred by the analysis functions.

use crate::error::{InsightError, Result};
use crate::types::ColumnKind;
use crate::utils::{is_numeric_dtype, kind_for_dtype};
use polars::prelude::*;

#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
    kinds: Vec<ColumnKind>,
}

impl Table {
    /// Wrap a DataFrame, assigning each column its kind from its dtype.
    pub fn new(frame: DataFrame) -> Self {
        let kinds = frame
            .get_columns()
            .iter()
            .map(|col| kind_for_dtype(col.dtype()))
            .collect();
        Self { frame, kinds }
    }

    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self::new(DataFrame::empty())
    }

    /// Override the kind of one column.
    ///
    /// Any column may be treated as categorical (e.g. numeric codes), but only
    /// physically numeric columns may be marked numeric.
    pub fn with_column_kind(mut self, column: &str, kind: ColumnKind) -> Result<Self> {
        let idx = self.column_index(column)?;
        if kind == ColumnKind::Numeric && !is_numeric_dtype(self.frame.get_columns()[idx].dtype())
        {
            return Err(InsightError::not_numeric(column));
        }
        self.kinds[idx] = kind;
        Ok(self)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.frame.shape()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Column names paired with their kinds, in table order.
    pub fn columns_with_kinds(&self) -> impl Iterator<Item = (&str, ColumnKind)> + '_ {
        self.frame
            .get_columns()
            .iter()
            .zip(self.kinds.iter().copied())
            .map(|(col, kind)| (col.name().as_str(), kind))
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_ok()
    }

    pub fn column_kind(&self, column: &str) -> Result<ColumnKind> {
        self.column_index(column).map(|idx| self.kinds[idx])
    }

    /// Look up a column's data.
    pub fn series(&self, column: &str) -> Result<&Series> {
        let idx = self.column_index(column)?;
        Ok(self.frame.get_columns()[idx].as_materialized_series())
    }

    /// Look up a column that must be numeric.
    pub fn numeric_series(&self, column: &str) -> Result<&Series> {
        match self.column_kind(column)? {
            ColumnKind::Numeric => self.series(column),
            ColumnKind::Categorical => Err(InsightError::not_numeric(column)),
        }
    }

    /// First `n` rows, for previews.
    pub fn head(&self, n: usize) -> DataFrame {
        self.frame.head(Some(n))
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.frame
            .get_column_index(column)
            .ok_or_else(|| InsightError::column_not_found(column))
    }
}

impl From<DataFrame> for Table {
    fn from(frame: DataFrame) -> Self {
        Table::new(frame)
    }
}
