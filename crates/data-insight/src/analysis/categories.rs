//! Category rankings by a summed numeric metric.

use crate::error::Result;
use crate::table::Table;
use crate::types::{CategoryAggregate, CategoryTotal, RankOrder};
use crate::utils::{category_keys, values_or_zero};
use std::collections::HashMap;
use tracing::debug;

/// Group `metric_col` by `category_col`, sum, rank and optionally truncate.
///
/// Groups are kept in first-appearance order before a stable sort, so equal
/// totals rank in the order their categories first appear.
pub(crate) fn rank(
    table: &Table,
    category_col: &str,
    metric_col: &str,
    order: RankOrder,
    limit: Option<usize>,
) -> Result<CategoryAggregate> {
    let keys = category_keys(table.series(category_col)?)?;
    let values = values_or_zero(table.numeric_series(metric_col)?)?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<CategoryTotal> = Vec::new();
    let mut skipped = 0usize;

    for (key, value) in keys.into_iter().zip(values) {
        let Some(key) = key else {
            skipped += 1;
            continue;
        };
        match index.get(&key) {
            Some(&pos) => rows[pos].total += value,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push(CategoryTotal {
                    category: key,
                    total: value,
                });
            }
        }
    }

    match order {
        RankOrder::Descending => rows.sort_by(|a, b| b.total.total_cmp(&a.total)),
        RankOrder::Ascending => rows.sort_by(|a, b| a.total.total_cmp(&b.total)),
    }

    if let Some(n) = limit {
        rows.truncate(n);
    }

    debug!(
        "Ranked {} categories of '{}' by '{}' ({} rows without a category)",
        rows.len(),
        category_col,
        metric_col,
        skipped
    );

    Ok(CategoryAggregate {
        category_column: category_col.to_string(),
        metric_column: metric_col.to_string(),
        order,
        rows,
    })
}
