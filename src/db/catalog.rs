//! Table metadata records: one `schema:<table>` record per table and one
//! `reference:<child>:<parent>` record per child/parent pair.

use std::collections::BTreeMap;

use tracing::debug;

use crate::db::database::Database;
use crate::db::table::core::schema::TableSchema;
use crate::error::DbResult;

pub const SCHEMA_PREFIX: &str = "schema:";
pub const DATA_PREFIX: &str = "data:";
pub const REFERENCE_PREFIX: &str = "reference:";

pub fn schema_key(table_name: &str) -> String {
    format!("{}{}", SCHEMA_PREFIX, table_name)
}

pub fn data_key(table_name: &str) -> String {
    format!("{}{}", DATA_PREFIX, table_name)
}

pub fn reference_key(child_table: &str, parent_table: &str) -> String {
    format!("{}{}:{}", REFERENCE_PREFIX, child_table, parent_table)
}

/// Foreign-key mapping from a child table's columns to its parent's columns.
#[derive(Debug, PartialEq, Clone)]
pub struct ForeignKeyRelation {
    pub child_table: String,
    pub parent_table: String,
    pub columns: BTreeMap<String, String>,
}

impl Database {
    pub fn has_table(&self, table_name: &str) -> DbResult<bool> {
        Ok(self.get_schema(table_name)?.is_some())
    }

    pub fn get_schema(&self, table_name: &str) -> DbResult<Option<TableSchema>> {
        self.get_record(&schema_key(table_name))
    }

    /// Table names in store key order.
    pub fn table_names(&self) -> DbResult<Vec<String>> {
        Ok(self
            .keys_with_prefix(SCHEMA_PREFIX)?
            .into_iter()
            .map(|key| key[SCHEMA_PREFIX.len()..].to_string())
            .collect())
    }

    pub fn get_relation(
        &self,
        child_table: &str,
        parent_table: &str,
    ) -> DbResult<Option<ForeignKeyRelation>> {
        let columns: Option<BTreeMap<String, String>> =
            self.get_record(&reference_key(child_table, parent_table))?;
        Ok(columns.map(|columns| ForeignKeyRelation {
            child_table: child_table.to_string(),
            parent_table: parent_table.to_string(),
            columns,
        }))
    }

    /// Whether any relation record names `table_name` as its parent.
    pub fn is_referenced(&self, table_name: &str) -> DbResult<bool> {
        Ok(self
            .keys_with_prefix(REFERENCE_PREFIX)?
            .iter()
            .filter_map(|key| key.rsplit(':').next())
            .any(|parent| parent == table_name))
    }

    pub(crate) fn put_schema(&mut self, schema: &TableSchema) -> DbResult<()> {
        self.put_record(&schema_key(&schema.name), schema)
    }

    /// Stores a relation. An existing record for the same child/parent pair
    /// is replaced.
    pub(crate) fn put_relation(&mut self, relation: &ForeignKeyRelation) -> DbResult<()> {
        self.put_record(
            &reference_key(&relation.child_table, &relation.parent_table),
            &relation.columns,
        )
    }

    /// Removes a table's outgoing relations, then its schema and data.
    pub(crate) fn delete_table(&mut self, table_name: &str) -> DbResult<()> {
        let outgoing_prefix = format!("{}{}:", REFERENCE_PREFIX, table_name);
        for key in self.keys_with_prefix(&outgoing_prefix)? {
            debug!(%key, "removing relation");
            self.delete_record(&key)?;
        }
        self.delete_record(&schema_key(table_name))?;
        self.delete_record(&data_key(table_name))?;
        Ok(())
    }
}
