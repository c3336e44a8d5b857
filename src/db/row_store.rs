//! Per-table row sequences, stored as one `data:<table>` record holding every
//! row and rewritten in full on each mutation.

use crate::db::catalog::data_key;
use crate::db::database::Database;
use crate::db::table::core::{row::Row, schema::TableSchema};
use crate::error::{DbError, DbResult};

impl Database {
    /// Rows of a table in insertion order. A missing record reads as empty.
    pub fn get_rows(&self, schema: &TableSchema) -> DbResult<Vec<Row>> {
        let key = data_key(&schema.name);
        let records: Vec<serde_json::Value> = match self.get_record(&key)? {
            Some(records) => records,
            None => return Ok(vec![]),
        };
        records
            .iter()
            .map(|record| {
                Row::from_json(record, schema).ok_or_else(|| DbError::CorruptRecord(key.clone()))
            })
            .collect()
    }

    pub(crate) fn put_rows(&mut self, schema: &TableSchema, rows: &[Row]) -> DbResult<()> {
        let records: Vec<serde_json::Value> = rows.iter().map(|row| row.to_json(schema)).collect();
        self.put_record(&data_key(&schema.name), &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::core::value::Value;
    use crate::db::table::test_utils::{default_database, users_schema};

    #[test]
    fn rows_keep_insertion_order() {
        let database = default_database();
        let rows = database.get_rows(&users_schema()).unwrap();
        let ids: Vec<Value> = rows.iter().map(|row| row[0].clone()).collect();
        assert_eq!(
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)],
            ids
        );
    }

    #[test]
    fn put_rows_overwrites_the_whole_sequence() {
        let mut database = default_database();
        let schema = users_schema();
        let row = Row(vec![Value::Int(9), Value::Null, Value::Null]);
        database.put_rows(&schema, &[row.clone()]).unwrap();
        assert_eq!(vec![row], database.get_rows(&schema).unwrap());
    }

    #[test]
    fn missing_data_record_reads_as_empty() {
        let database = Database::in_memory();
        assert!(database.get_rows(&users_schema()).unwrap().is_empty());
    }

    #[test]
    fn rows_that_do_not_fit_the_schema_are_corrupt() {
        let mut database = Database::in_memory();
        database
            .put_record("data:users", &serde_json::json!([{"id": "x"}]))
            .unwrap();
        assert!(matches!(
            database.get_rows(&users_schema()),
            Err(DbError::CorruptRecord(_))
        ));
    }
}
