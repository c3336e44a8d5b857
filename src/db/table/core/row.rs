use std::ops::{Deref, DerefMut};

use crate::db::table::core::schema::TableSchema;
use crate::db::table::core::value::Value;

/// Positional values aligned with the owning table's column order.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
#[repr(transparent)]
pub struct Row(pub Vec<Value>);

impl Deref for Row {
    type Target = Vec<Value>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Row {
    /// Encodes the row as an object keyed by column name.
    pub fn to_json(&self, schema: &TableSchema) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (column, value) in schema.columns.iter().zip(self.iter()) {
            object.insert(column.name.clone(), value.to_json());
        }
        serde_json::Value::Object(object)
    }

    /// Decodes a stored row object. Missing columns read as NULL; a cell that
    /// does not fit its column type yields `None`.
    pub fn from_json(json: &serde_json::Value, schema: &TableSchema) -> Option<Row> {
        let object = json.as_object()?;
        let mut values = Vec::with_capacity(schema.width());
        for column in schema.columns.iter() {
            let value = match object.get(&column.name) {
                Some(cell) => Value::from_json(cell, &column.data_type)?,
                None => Value::Null,
            };
            values.push(value);
        }
        Some(Row(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::test_utils::users_schema;

    #[test]
    fn row_is_encoded_by_column_name() {
        let row = Row(vec![
            Value::Int(1),
            Value::Char("John".to_string()),
            Value::Null,
        ]);
        let json = row.to_json(&users_schema());
        assert_eq!(serde_json::json!({"id": 1, "name": "John", "joined": null}), json);
        assert_eq!(Some(row), Row::from_json(&json, &users_schema()));
    }

    #[test]
    fn missing_cells_decode_as_null() {
        let json = serde_json::json!({"id": 7});
        let row = Row::from_json(&json, &users_schema()).unwrap();
        assert_eq!(Row(vec![Value::Int(7), Value::Null, Value::Null]), row);
    }

    #[test]
    fn mistyped_cells_are_rejected() {
        let json = serde_json::json!({"id": "seven"});
        assert_eq!(None, Row::from_json(&json, &users_schema()));
    }
}
