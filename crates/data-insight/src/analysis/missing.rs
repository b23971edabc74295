//! Missing-value summary.

use crate::error::Result;
use crate::table::Table;
use crate::types::{MissingEntry, MissingReport};
use crate::utils::{absent_count, round_to};
use tracing::debug;

/// Summarize absent values per column, most missing first.
pub(crate) fn summarize(table: &Table, percent_decimals: u32) -> Result<MissingReport> {
    let total_rows = table.height();
    if total_rows == 0 {
        return Ok(MissingReport::default());
    }

    let mut entries = Vec::new();
    for col in table.frame().get_columns() {
        let missing_count = absent_count(col.as_materialized_series())?;
        if missing_count == 0 {
            continue;
        }
        let percent = missing_count as f64 / total_rows as f64 * 100.0;
        entries.push(MissingEntry {
            column: col.name().to_string(),
            missing_count,
            missing_percent: round_to(percent, percent_decimals),
        });
    }

    // stable: equal counts stay in column order
    entries.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));

    debug!(
        "{} of {} columns have missing values",
        entries.len(),
        table.width()
    );

    Ok(MissingReport {
        total_rows,
        entries,
    })
}
