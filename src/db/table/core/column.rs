use serde::{Deserialize, Serialize};

use crate::db::table::core::value::DataType;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub not_null: bool,
    pub primary_key: bool,
    pub foreign_key: bool,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            not_null: false,
            primary_key: false,
            foreign_key: false,
        }
    }

    /// Key column of a describe listing: `PRI`, `FOR`, `PRI/FOR` or empty.
    pub fn key_label(&self) -> &'static str {
        match (self.primary_key, self.foreign_key) {
            (true, true) => "PRI/FOR",
            (true, false) => "PRI",
            (false, true) => "FOR",
            (false, false) => "",
        }
    }

    pub fn null_label(&self) -> &'static str {
        if self.not_null { "N" } else { "Y" }
    }
}
