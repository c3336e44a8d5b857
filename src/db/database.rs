use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::db::output::StatementOutput;
use crate::db::store::{KvStore, MemoryStore};
use crate::db::table::operations::{
    create_table, delete, describe, drop_table, insert, select, show_tables,
};
use crate::error::{DbError, DbResult};
use crate::interpreter::ast::SqlStatement;

/// The query engine over one key-value store. Every statement takes
/// `&mut self`, so statements never overlap.
pub struct Database {
    store: Box<dyn KvStore>,
}

impl Database {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn execute(&mut self, sql_statement: SqlStatement) -> DbResult<StatementOutput> {
        return match sql_statement {
            SqlStatement::CreateTable(statement) => {
                let table_name = create_table::create_table(self, statement)?;
                Ok(StatementOutput::TableCreated(table_name))
            }
            SqlStatement::DropTable(statement) => {
                let table_name = drop_table::drop_table(self, statement)?;
                Ok(StatementOutput::TableDropped(table_name))
            }
            SqlStatement::Describe(statement) => {
                let columns = describe::describe(self, statement)?;
                Ok(StatementOutput::Described(columns))
            }
            SqlStatement::ShowTables => {
                let table_names = show_tables::show_tables(self)?;
                Ok(StatementOutput::TablesListed(table_names))
            }
            SqlStatement::InsertInto(statement) => {
                insert::insert(self, statement)?;
                Ok(StatementOutput::Inserted)
            }
            SqlStatement::Delete(statement) => {
                let rows_deleted = delete::delete(self, statement)?;
                Ok(StatementOutput::Deleted(rows_deleted))
            }
            SqlStatement::Select(statement) => {
                let result = select::select(self, statement)?;
                Ok(StatementOutput::Selected(result))
            }
            SqlStatement::Exit => Ok(StatementOutput::Exit),
        };
    }

    /// Closes the underlying store. The database cannot be used afterwards.
    pub fn close(self) -> DbResult<()> {
        self.store.close()?;
        info!("store closed");
        Ok(())
    }

    /// Every raw record in store order.
    pub fn records(&self) -> DbResult<Vec<(Vec<u8>, Vec<u8>)>> {
        Ok(self.store.scan()?)
    }

    pub(crate) fn get_record<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        match self.store.get(key.as_bytes())? {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes)
                    .map_err(|_| DbError::CorruptRecord(key.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn put_record<T: Serialize + ?Sized>(&mut self, key: &str, record: &T) -> DbResult<()> {
        let bytes = serde_json::to_vec(record)?;
        debug!(key, bytes = bytes.len(), "writing record");
        self.store.put(key.as_bytes(), &bytes)?;
        Ok(())
    }

    pub(crate) fn delete_record(&mut self, key: &str) -> DbResult<()> {
        debug!(key, "deleting record");
        self.store.delete(key.as_bytes())?;
        Ok(())
    }

    /// Keys starting with `prefix`, in store order.
    pub(crate) fn keys_with_prefix(&self, prefix: &str) -> DbResult<Vec<String>> {
        Ok(self
            .store
            .scan()?
            .into_iter()
            .map(|(key, _)| String::from_utf8_lossy(&key).into_owned())
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}
