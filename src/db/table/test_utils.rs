use std::collections::BTreeMap;

use crate::db::catalog::ForeignKeyRelation;
use crate::db::database::Database;
use crate::db::table::core::{
    column::ColumnDefinition, row::Row, schema::TableSchema, value::DataType, value::Value,
};

pub fn users_schema() -> TableSchema {
    let mut id = ColumnDefinition::new("id", DataType::Int);
    id.primary_key = true;
    id.not_null = true;
    TableSchema::new(
        "users",
        vec![
            id,
            ColumnDefinition::new("name", DataType::Char(10)),
            ColumnDefinition::new("joined", DataType::Date),
        ],
    )
}

pub fn orders_schema() -> TableSchema {
    let mut order_id = ColumnDefinition::new("order_id", DataType::Int);
    order_id.primary_key = true;
    order_id.not_null = true;
    let mut user_id = ColumnDefinition::new("user_id", DataType::Int);
    user_id.foreign_key = true;
    TableSchema::new(
        "orders",
        vec![
            order_id,
            user_id,
            ColumnDefinition::new("item", DataType::Char(20)),
            ColumnDefinition::new("amount", DataType::Int),
        ],
    )
}

pub fn text(value: &str) -> Value {
    Value::Char(value.to_string())
}

pub fn date(value: &str) -> Value {
    Value::Date(value.to_string())
}

pub fn users_rows() -> Vec<Row> {
    vec![
        Row(vec![Value::Int(1), text("John"), date("2020-01-15")]),
        Row(vec![Value::Int(2), text("Jane"), date("2021-06-30")]),
        Row(vec![Value::Int(3), text("Jim"), Value::Null]),
        Row(vec![Value::Int(4), Value::Null, date("2019-12-01")]),
    ]
}

pub fn orders_rows() -> Vec<Row> {
    vec![
        Row(vec![Value::Int(10), Value::Int(1), text("lamp"), Value::Int(30)]),
        Row(vec![Value::Int(11), Value::Int(2), text("desk"), Value::Int(120)]),
        Row(vec![Value::Int(12), Value::Int(1), text("chair"), Value::Null]),
        Row(vec![Value::Int(13), Value::Null, text("rug"), Value::Int(45)]),
    ]
}

/// `users` and `orders` on the in-memory store, with `orders.user_id`
/// referencing `users.id`.
pub fn default_database() -> Database {
    let mut database = Database::in_memory();
    for (schema, rows) in [
        (users_schema(), users_rows()),
        (orders_schema(), orders_rows()),
    ] {
        database.put_schema(&schema).unwrap();
        database.put_rows(&schema, &rows).unwrap();
    }
    database
        .put_relation(&ForeignKeyRelation {
            child_table: "orders".to_string(),
            parent_table: "users".to_string(),
            columns: BTreeMap::from([("user_id".to_string(), "id".to_string())]),
        })
        .unwrap();
    database
}
