use tracing::debug;

use crate::db::database::Database;
use crate::db::table::operations::helpers::{binding::BindingContext, predicate::bind_where_clause};
use crate::error::{Clause, Command, DbError, DbResult};
use crate::interpreter::ast::DeleteStatement;

/// Removes the rows matching the WHERE condition, or every row without one.
/// Returns how many rows were removed.
pub fn delete(database: &mut Database, statement: DeleteStatement) -> DbResult<usize> {
    let schema = database
        .get_schema(&statement.table_name)?
        .ok_or(DbError::NoSuchTable(Command::Delete))?;
    let mut rows = database.get_rows(&schema)?;

    let Some(where_clause) = statement.where_clause else {
        let rows_deleted = rows.len();
        database.put_rows(&schema, &[])?;
        debug!(table = %schema.name, rows_deleted, "rows deleted");
        return Ok(rows_deleted);
    };

    let context = BindingContext::single(schema.clone());
    let condition = bind_where_clause(&where_clause, &context, Clause::Where)?;
    let mut row_indicies_to_delete = vec![];
    for (index, row) in rows.iter().enumerate() {
        if condition.evaluate(row)? {
            row_indicies_to_delete.push(index);
        }
    }

    for index in row_indicies_to_delete.iter().rev() {
        rows.remove(*index);
    }
    database.put_rows(&schema, &rows)?;
    debug!(table = %schema.name, rows_deleted = row_indicies_to_delete.len(), "rows deleted");
    Ok(row_indicies_to_delete.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::core::value::Value;
    use crate::db::table::test_utils::{default_database, orders_schema};
    use crate::interpreter::ast::{ColumnRef, Literal, Operand, Operator, Predicate, PredicateKind, WhereClause};

    fn orders_statement(where_clause: Option<WhereClause>) -> DeleteStatement {
        DeleteStatement {
            table_name: "orders".to_string(),
            where_clause,
        }
    }

    fn compare(table: Option<&str>, column: &str, operator: Operator, value: i64) -> Predicate {
        Predicate {
            negated: false,
            kind: PredicateKind::Comparison {
                left: Operand::Column(ColumnRef::new(table, column)),
                operator,
                right: Operand::Literal(Literal::Int(value)),
            },
        }
    }

    fn is_null(column: &str, is_null: bool) -> Predicate {
        Predicate {
            negated: false,
            kind: PredicateKind::NullCheck {
                column: ColumnRef::new(None, column),
                is_null,
            },
        }
    }

    fn remaining_ids(database: &Database) -> Vec<Value> {
        database
            .get_rows(&orders_schema())
            .unwrap()
            .into_iter()
            .map(|row| row[0].clone())
            .collect()
    }

    #[test]
    fn delete_without_where_removes_everything() {
        let mut database = default_database();
        assert_eq!(4, delete(&mut database, orders_statement(None)).unwrap());
        assert!(remaining_ids(&database).is_empty());
        assert!(database.has_table("orders").unwrap());
    }

    #[test]
    fn delete_with_single_predicate() {
        let mut database = default_database();
        let where_clause = WhereClause::Single(compare(None, "order_id", Operator::GreaterEquals, 12));
        assert_eq!(2, delete(&mut database, orders_statement(Some(where_clause))).unwrap());
        assert_eq!(vec![Value::Int(10), Value::Int(11)], remaining_ids(&database));
    }

    #[test]
    fn delete_with_and_or() {
        let mut database = default_database();
        let where_clause = WhereClause::And(
            compare(Some("orders"), "order_id", Operator::LessThan, 13),
            is_null("amount", false),
        );
        assert_eq!(2, delete(&mut database, orders_statement(Some(where_clause))).unwrap());
        assert_eq!(vec![Value::Int(12), Value::Int(13)], remaining_ids(&database));

        let where_clause = WhereClause::Or(
            compare(None, "order_id", Operator::Equals, 12),
            is_null("amount", true),
        );
        assert_eq!(1, delete(&mut database, orders_statement(Some(where_clause))).unwrap());
        assert_eq!(vec![Value::Int(13)], remaining_ids(&database));
    }

    #[test]
    fn comparing_null_cells_fails_without_deleting() {
        let mut database = default_database();
        let before = database.records().unwrap();
        let where_clause = WhereClause::Single(compare(None, "user_id", Operator::Equals, 1));
        let error = delete(&mut database, orders_statement(Some(where_clause))).unwrap_err();
        assert!(matches!(error, DbError::Incomparable));
        assert_eq!(before, database.records().unwrap());
    }

    #[test]
    fn where_resolution_errors() {
        let mut database = default_database();
        let cases = [
            (
                WhereClause::Single(compare(Some("users"), "order_id", Operator::Equals, 1)),
                "WHERE clause trying to reference tables which are not specified",
            ),
            (
                WhereClause::Single(compare(None, "price", Operator::Equals, 1)),
                "WHERE clause trying to reference non existing column",
            ),
            (
                WhereClause::Single(Predicate {
                    negated: false,
                    kind: PredicateKind::Comparison {
                        left: Operand::Column(ColumnRef::new(None, "item")),
                        operator: Operator::Equals,
                        right: Operand::Literal(Literal::Int(3)),
                    },
                }),
                "Trying to compare incomparable columns or values",
            ),
        ];
        for (where_clause, message) in cases {
            let error = delete(&mut database, orders_statement(Some(where_clause))).unwrap_err();
            assert_eq!(message, error.to_string());
        }
        let error = delete(
            &mut database,
            DeleteStatement {
                table_name: "ghosts".to_string(),
                where_clause: None,
            },
        )
        .unwrap_err();
        assert_eq!("Delete has failed: no such table", error.to_string());
    }
}
