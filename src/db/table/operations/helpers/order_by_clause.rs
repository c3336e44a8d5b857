use std::cmp::Ordering;

use crate::db::table::core::row::Row;
use crate::db::table::operations::helpers::binding::BindingContext;
use crate::error::{Clause, DbResult};
use crate::interpreter::ast::{OrderByDirection, OrderByItem};

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SortKey {
    pub index: usize,
    pub direction: OrderByDirection,
}

/// Keys are resolved last to first, the order they are sorted in, so the
/// last failing key is the one reported. The result is in declared order.
pub fn bind_order_by(items: &[OrderByItem], context: &BindingContext) -> DbResult<Vec<SortKey>> {
    let mut keys = items
        .iter()
        .rev()
        .map(|item| {
            Ok(SortKey {
                index: context.resolve(&item.column, Clause::OrderBy)?.index,
                direction: item.direction,
            })
        })
        .collect::<DbResult<Vec<SortKey>>>()?;
    keys.reverse();
    Ok(keys)
}

// Sorting by the last key first with a stable sort lets earlier keys win ties.
pub fn apply_order_by(rows: &mut [Row], keys: &[SortKey]) {
    for key in keys.iter().rev() {
        rows.sort_by(|first, second| {
            let ordering: Ordering = first[key.index].sort_cmp(&second[key.index]);
            match key.direction {
                OrderByDirection::Asc => ordering,
                OrderByDirection::Desc => ordering.reverse(),
            }
        });
    }
}
