use crate::db::database::Database;
use crate::error::DbResult;

/// Names of every existing table in store key order.
pub fn show_tables(database: &Database) -> DbResult<Vec<String>> {
    database.table_names()
}
