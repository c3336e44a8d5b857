use crate::db::database::Database;
use crate::db::table::core::column::ColumnDefinition;
use crate::error::{DbError, DbResult};
use crate::interpreter::ast::DescribeStatement;

/// Column definitions in declaration order. The command spelling only
/// affects the error message.
pub fn describe(database: &Database, statement: DescribeStatement) -> DbResult<Vec<ColumnDefinition>> {
    return match database.get_schema(&statement.table_name)? {
        Some(schema) => Ok(schema.columns),
        None => Err(DbError::NoSuchTable(statement.command.into())),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::test_utils::default_database;
    use crate::interpreter::ast::DescribeCommand;

    #[test]
    fn describe_returns_columns_in_order() {
        let database = default_database();
        let columns = describe(
            &database,
            DescribeStatement {
                command: DescribeCommand::Describe,
                table_name: "orders".to_string(),
            },
        )
        .unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(vec!["order_id", "user_id", "item", "amount"], names);
        assert_eq!("PRI", columns[0].key_label());
        assert_eq!("FOR", columns[1].key_label());
    }

    #[test]
    fn missing_table_error_names_the_command() {
        let database = default_database();
        for (command, message) in [
            (DescribeCommand::Explain, "Explain has failed: no such table"),
            (DescribeCommand::Describe, "Describe has failed: no such table"),
            (DescribeCommand::Desc, "Desc has failed: no such table"),
        ] {
            let error = describe(
                &database,
                DescribeStatement {
                    command,
                    table_name: "ghosts".to_string(),
                },
            )
            .unwrap_err();
            assert_eq!(message, error.to_string());
        }
    }
}
