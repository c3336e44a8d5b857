use tracing::info;

use crate::db::database::Database;
use crate::error::{Command, DbError, DbResult};
use crate::interpreter::ast::DropTableStatement;

pub fn drop_table(database: &mut Database, statement: DropTableStatement) -> DbResult<String> {
    if !database.has_table(&statement.table_name)? {
        return Err(DbError::NoSuchTable(Command::DropTable));
    }
    if database.is_referenced(&statement.table_name)? {
        return Err(DbError::DropReferencedTable(statement.table_name));
    }
    database.delete_table(&statement.table_name)?;
    info!(table = %statement.table_name, "table dropped");
    Ok(statement.table_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::test_utils::default_database;

    fn statement(table_name: &str) -> DropTableStatement {
        DropTableStatement {
            table_name: table_name.to_string(),
        }
    }

    #[test]
    fn drop_table_removes_schema_data_and_outgoing_relations() {
        let mut database = default_database();
        assert_eq!("orders", drop_table(&mut database, statement("orders")).unwrap());
        assert!(!database.has_table("orders").unwrap());
        assert_eq!(None, database.get_relation("orders", "users").unwrap());
        assert!(!database.is_referenced("users").unwrap());
        let keys: Vec<Vec<u8>> = database.records().unwrap().into_iter().map(|(key, _)| key).collect();
        assert_eq!(vec![b"data:users".to_vec(), b"schema:users".to_vec()], keys);
    }

    #[test]
    fn referenced_table_cannot_be_dropped() {
        let mut database = default_database();
        let before = database.records().unwrap();
        let error = drop_table(&mut database, statement("users")).unwrap_err();
        assert_eq!(
            "Drop table has failed: 'users' is referenced by another table",
            error.to_string()
        );
        assert_eq!(before, database.records().unwrap());
    }

    #[test]
    fn parent_can_be_dropped_after_child() {
        let mut database = default_database();
        drop_table(&mut database, statement("orders")).unwrap();
        drop_table(&mut database, statement("users")).unwrap();
        assert!(database.records().unwrap().is_empty());
    }

    #[test]
    fn missing_table_errors() {
        let mut database = default_database();
        let error = drop_table(&mut database, statement("ghosts")).unwrap_err();
        assert_eq!("Drop table has failed: no such table", error.to_string());
    }
}
