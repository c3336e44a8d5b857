use serde::{Deserialize, Serialize};

use crate::db::table::core::column::ColumnDefinition;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    pub fn new(name: &str, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.to_string(),
            columns,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn get_column(&self, column_name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.name == column_name)
    }

    pub fn has_column(&self, column_name: &str) -> bool {
        self.get_column(column_name).is_some()
    }

    pub fn get_index_of_column(&self, column_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.name == column_name)
    }

    pub fn get_column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| column.name.as_str())
            .collect()
    }
}
