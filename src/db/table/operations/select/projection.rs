use std::cmp::Ordering;

use crate::db::output::QueryResult;
use crate::db::table::core::{row::Row, value::Value};
use crate::db::table::operations::helpers::binding::BindingContext;
use crate::error::{Clause, DbError, DbResult};
use crate::interpreter::ast::{AggregateFunction, SelectItem, Selectable};

const AGGREGATE_NULL: &str = "NULL";

enum Projected {
    Column(usize),
    Aggregate(AggregateFunction, usize),
    CountAll,
}

/// Turns the filtered rows into headers and cells. An empty select list
/// stands for every bound column.
pub fn project(context: &BindingContext, items: &[SelectItem], rows: &[Row]) -> DbResult<QueryResult> {
    if items.is_empty() {
        let columns = context.all_columns();
        return Ok(QueryResult {
            headers: columns
                .iter()
                .map(|column| format!("{}.{}", column.alias, column.definition.name))
                .collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|column| row[column.index].to_string()).collect())
                .collect(),
        });
    }

    let has_aggregate = items
        .iter()
        .any(|item| !matches!(item.selectable, Selectable::Column(_)));
    if has_aggregate {
        if let Some(column) = items.iter().find_map(|item| match &item.selectable {
            Selectable::Column(column) => Some(column),
            _ => None,
        }) {
            return Err(DbError::SelectColumnNotGrouped(column.column.clone()));
        }
    }

    let mut headers = Vec::with_capacity(items.len());
    let mut projected = Vec::with_capacity(items.len());
    for item in items.iter() {
        let (header, target) = match &item.selectable {
            Selectable::Column(column) => {
                let resolved = context.resolve(column, Clause::Select)?;
                (
                    format!("{}.{}", resolved.alias, resolved.definition.name),
                    Projected::Column(resolved.index),
                )
            }
            Selectable::Aggregate { function, column } => {
                let resolved = context.resolve(column, Clause::Select)?;
                (
                    format!("{}({}.{})", function, resolved.alias, resolved.definition.name),
                    Projected::Aggregate(*function, resolved.index),
                )
            }
            Selectable::CountAll => ("count(*)".to_string(), Projected::CountAll),
        };
        headers.push(item.alias.clone().unwrap_or(header));
        projected.push(target);
    }

    let cells: Vec<Vec<String>> = if has_aggregate {
        vec![projected.iter().map(|target| aggregate(target, rows)).collect()]
    } else {
        rows.iter()
            .map(|row| {
                projected
                    .iter()
                    .map(|target| match target {
                        Projected::Column(index) => row[*index].to_string(),
                        _ => String::new(),
                    })
                    .collect()
            })
            .collect()
    };
    Ok(QueryResult {
        headers,
        rows: cells,
    })
}

fn aggregate(target: &Projected, rows: &[Row]) -> String {
    let (function, index) = match target {
        Projected::CountAll => return rows.len().to_string(),
        Projected::Column(_) => return String::new(),
        Projected::Aggregate(function, index) => (*function, *index),
    };
    let values = rows.iter().map(|row| &row[index]).filter(|value| !value.is_null());
    match function {
        AggregateFunction::Count => rows.len().to_string(),
        AggregateFunction::Sum => values
            .fold(0i128, |total, value| match value {
                Value::Int(val) => total + i128::from(*val),
                _ => total,
            })
            .to_string(),
        AggregateFunction::Max => extreme(values, Ordering::Greater),
        AggregateFunction::Min => extreme(values, Ordering::Less),
    }
}

fn extreme<'a>(values: impl Iterator<Item = &'a Value>, wanted: Ordering) -> String {
    values
        .fold(None, |best: Option<&Value>, value| match best {
            Some(current) if value.compare(current) != Some(wanted) => Some(current),
            _ => Some(value),
        })
        .map(|value| value.to_string())
        .unwrap_or_else(|| AGGREGATE_NULL.to_string())
}
