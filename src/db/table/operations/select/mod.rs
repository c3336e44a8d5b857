//! SELECT execution: bind, cross product, join filter, WHERE filter, sort,
//! then projection or aggregation. Every stage validates before it touches
//! rows, so errors surface even when the row set is empty.

mod projection;

use tracing::debug;

use crate::db::database::Database;
use crate::db::output::QueryResult;
use crate::db::table::core::row::Row;
use crate::db::table::operations::helpers::{
    binding::BindingContext,
    order_by_clause::{apply_order_by, bind_order_by},
    predicate::bind_where_clause,
};
use crate::error::{Clause, DbError, DbResult};
use crate::interpreter::ast::{JoinClause, SelectStatement};

pub fn select(database: &Database, statement: SelectStatement) -> DbResult<QueryResult> {
    let context = bind_tables(database, &statement)?;
    let mut rows = cross_product(database, &context)?;

    for join in statement.joins.iter() {
        rows = filter_join(&context, join, rows)?;
    }

    if let Some(where_clause) = &statement.where_clause {
        let condition = bind_where_clause(where_clause, &context, Clause::Where)?;
        let mut retained = Vec::with_capacity(rows.len());
        for row in rows {
            if condition.evaluate(&row)? {
                retained.push(row);
            }
        }
        rows = retained;
    }

    let sort_keys = bind_order_by(&statement.order_by, &context)?;
    apply_order_by(&mut rows, &sort_keys);

    debug!(rows = rows.len(), "select rows filtered");
    projection::project(&context, &statement.columns, &rows)
}

/// FROM entries bind under their alias, JOIN entries under their table name.
fn bind_tables(database: &Database, statement: &SelectStatement) -> DbResult<BindingContext> {
    let mut context = BindingContext::new();
    let from = statement
        .from
        .iter()
        .map(|table| (table.name.as_str(), table.alias.as_deref().unwrap_or(&table.name)));
    let joined = statement
        .joins
        .iter()
        .map(|join| (join.table_name.as_str(), join.table_name.as_str()));
    for (table_name, alias) in from.chain(joined) {
        let schema = database
            .get_schema(table_name)?
            .ok_or_else(|| DbError::SelectTableExistence(table_name.to_string()))?;
        context.bind(alias, schema);
    }
    Ok(context)
}

fn cross_product(database: &Database, context: &BindingContext) -> DbResult<Vec<Row>> {
    let mut product = vec![Row(vec![])];
    for binding in context.bindings() {
        let table_rows = database.get_rows(&binding.schema)?;
        let mut next = Vec::with_capacity(product.len() * table_rows.len());
        for left in product.iter() {
            for right in table_rows.iter() {
                let mut combined = left.clone();
                combined.extend(right.iter().cloned());
                next.push(combined);
            }
        }
        product = next;
    }
    Ok(product)
}

/// Both aliases are checked before either column is looked up.
fn filter_join(context: &BindingContext, join: &JoinClause, rows: Vec<Row>) -> DbResult<Vec<Row>> {
    for alias in [&join.left.table, &join.right.table].into_iter().flatten() {
        if !context.has_alias(alias) {
            return Err(DbError::TableNotSpecified(Clause::Join));
        }
    }
    let left = context.resolve(&join.left, Clause::Join)?;
    let right = context.resolve(&join.right, Clause::Join)?;
    if left.definition.data_type.family() != right.definition.data_type.family() {
        return Err(DbError::Incomparable);
    }
    let (left, right) = (left.index, right.index);
    Ok(rows
        .into_iter()
        .filter(|row| !row[left].is_null() && row[left] == row[right])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::test_utils::default_database;
    use crate::interpreter::ast::{
        AggregateFunction, ColumnRef, Literal, Operand, Operator, OrderByDirection, OrderByItem,
        Predicate, PredicateKind, SelectItem, Selectable, TableReference, WhereClause,
    };

    fn from(tables: &[(&str, Option<&str>)]) -> SelectStatement {
        SelectStatement {
            columns: vec![],
            from: tables
                .iter()
                .map(|(name, alias)| TableReference {
                    name: name.to_string(),
                    alias: alias.map(|alias| alias.to_string()),
                })
                .collect(),
            joins: vec![],
            where_clause: None,
            order_by: vec![],
        }
    }

    fn column(table: Option<&str>, name: &str) -> SelectItem {
        SelectItem {
            selectable: Selectable::Column(ColumnRef::new(table, name)),
            alias: None,
        }
    }

    fn join(table_name: &str, left: (&str, &str), right: (&str, &str)) -> JoinClause {
        JoinClause {
            table_name: table_name.to_string(),
            left: ColumnRef::new(Some(left.0), left.1),
            right: ColumnRef::new(Some(right.0), right.1),
        }
    }

    #[test]
    fn select_star_from_single_table() {
        let database = default_database();
        let result = select(&database, from(&[("users", None)])).unwrap();
        assert_eq!(vec!["users.id", "users.name", "users.joined"], result.headers);
        assert_eq!(4, result.rows.len());
        assert_eq!(vec!["3", "Jim", "null"], result.rows[2]);
    }

    #[test]
    fn cross_product_of_two_tables() {
        let database = default_database();
        let result = select(&database, from(&[("users", Some("u")), ("orders", Some("o"))])).unwrap();
        assert_eq!(16, result.rows.len());
        assert_eq!(7, result.headers.len());
        assert_eq!("u.id", result.headers[0]);
        assert_eq!("o.order_id", result.headers[3]);
    }

    #[test]
    fn join_keeps_matching_rows_and_never_matches_null() {
        let database = default_database();
        let mut statement = from(&[("users", Some("u"))]);
        statement.joins = vec![join("orders", ("u", "id"), ("orders", "user_id"))];
        statement.columns = vec![column(Some("u"), "name"), column(None, "item")];
        statement.order_by = vec![OrderByItem {
            column: ColumnRef::new(None, "order_id"),
            direction: OrderByDirection::Asc,
        }];
        let result = select(&database, statement).unwrap();
        assert_eq!(vec!["u.name", "orders.item"], result.headers);
        assert_eq!(
            vec![vec!["John", "lamp"], vec!["Jane", "desk"], vec!["John", "chair"]],
            result.rows
        );
    }

    #[test]
    fn join_errors() {
        let database = default_database();
        let cases = [
            (
                join("orders", ("x", "id"), ("orders", "user_id")),
                "JOIN clause trying to reference tables which are not specified",
            ),
            (
                join("orders", ("users", "uid"), ("orders", "user_id")),
                "JOIN clause trying to reference non existing column",
            ),
            (
                join("orders", ("users", "nosuch"), ("x", "user_id")),
                "JOIN clause trying to reference tables which are not specified",
            ),
            (
                join("orders", ("users", "joined"), ("orders", "user_id")),
                "Trying to compare incomparable columns or values",
            ),
        ];
        for (join, message) in cases {
            let mut statement = from(&[("users", None)]);
            statement.joins = vec![join];
            assert_eq!(message, select(&database, statement).unwrap_err().to_string());
        }
    }

    #[test]
    fn unknown_table_errors() {
        let database = default_database();
        let error = select(&database, from(&[("ghosts", None)])).unwrap_err();
        assert_eq!("Select has failed: 'ghosts' does not exist", error.to_string());
    }

    #[test]
    fn where_filters_and_order_by_sorts_nulls_first() {
        let database = default_database();
        let mut statement = from(&[("orders", None)]);
        statement.where_clause = Some(WhereClause::Single(Predicate {
            negated: true,
            kind: PredicateKind::Comparison {
                left: Operand::Column(ColumnRef::new(None, "order_id")),
                operator: Operator::Equals,
                right: Operand::Literal(Literal::Int(11)),
            },
        }));
        statement.order_by = vec![OrderByItem {
            column: ColumnRef::new(None, "amount"),
            direction: OrderByDirection::Asc,
        }];
        statement.columns = vec![column(None, "order_id")];
        let result = select(&database, statement).unwrap();
        assert_eq!(vec![vec!["12"], vec!["10"], vec!["13"]], result.rows);
    }

    #[test]
    fn where_is_validated_on_empty_tables() {
        let mut database = default_database();
        database
            .put_rows(&crate::db::table::test_utils::orders_schema(), &[])
            .unwrap();
        let mut statement = from(&[("orders", None)]);
        statement.where_clause = Some(WhereClause::Single(Predicate {
            negated: false,
            kind: PredicateKind::Comparison {
                left: Operand::Column(ColumnRef::new(None, "item")),
                operator: Operator::LessThan,
                right: Operand::Literal(Literal::Str("m".to_string())),
            },
        }));
        assert!(matches!(select(&database, statement), Err(DbError::Incomparable)));
    }

    #[test]
    fn ambiguous_where_reference() {
        let database = default_database();
        let mut statement = from(&[("users", Some("a")), ("users", Some("b"))]);
        statement.where_clause = Some(WhereClause::Single(Predicate {
            negated: false,
            kind: PredicateKind::NullCheck {
                column: ColumnRef::new(None, "id"),
                is_null: true,
            },
        }));
        assert_eq!(
            "WHERE clause contains ambiguous column reference",
            select(&database, statement).unwrap_err().to_string()
        );
    }

    #[test]
    fn not_grouped_check_runs_on_empty_results() {
        let database = default_database();
        let mut statement = from(&[("orders", None)]);
        statement.where_clause = Some(WhereClause::Single(Predicate {
            negated: false,
            kind: PredicateKind::NullCheck {
                column: ColumnRef::new(None, "item"),
                is_null: true,
            },
        }));
        statement.columns = vec![
            column(None, "item"),
            SelectItem {
                selectable: Selectable::Aggregate {
                    function: AggregateFunction::Sum,
                    column: ColumnRef::new(None, "amount"),
                },
                alias: None,
            },
        ];
        assert!(matches!(
            select(&database, statement),
            Err(DbError::SelectColumnNotGrouped(column)) if column == "item"
        ));
    }
}
