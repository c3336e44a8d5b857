use tracing::debug;

use crate::db::database::Database;
use crate::db::table::core::{row::Row, schema::TableSchema, value::DataType, value::Value};
use crate::error::{Command, DbError, DbResult};
use crate::interpreter::ast::{InsertIntoStatement, Literal};

pub fn insert(database: &mut Database, statement: InsertIntoStatement) -> DbResult<()> {
    let schema = database
        .get_schema(&statement.table_name)?
        .ok_or(DbError::NoSuchTable(Command::Insert))?;

    let literals = order_literals(&schema, statement.columns.as_deref(), statement.values)?;
    let mut row = Row(Vec::with_capacity(schema.width()));
    for (column, literal) in schema.columns.iter().zip(literals) {
        let value = match (&column.data_type, literal) {
            (_, Literal::Null) if column.not_null => {
                return Err(DbError::InsertColumnNonNullable(column.name.clone()));
            }
            (_, Literal::Null) => Value::Null,
            (DataType::Int, Literal::Int(val)) => Value::Int(val),
            (DataType::Char(length), Literal::Str(val)) => {
                Value::Char(val.chars().take(*length).collect())
            }
            (DataType::Date, Literal::Date(val)) => Value::Date(val),
            _ => return Err(DbError::InsertTypeMismatch),
        };
        row.push(value);
    }

    let mut rows = database.get_rows(&schema)?;
    rows.push(row);
    database.put_rows(&schema, &rows)?;
    debug!(table = %schema.name, rows = rows.len(), "row inserted");
    Ok(())
}

/// Lines the literals up with the schema's column order. Columns missing
/// from an explicit list get NULL; a repeated column keeps its first value.
fn order_literals(
    schema: &TableSchema,
    columns: Option<&[String]>,
    values: Vec<Literal>,
) -> DbResult<Vec<Literal>> {
    let Some(columns) = columns else {
        if values.len() != schema.width() {
            return Err(DbError::InsertTypeMismatch);
        }
        return Ok(values);
    };

    if columns.len() != values.len() {
        return Err(DbError::InsertTypeMismatch);
    }
    for column in columns.iter() {
        if !schema.has_column(column) {
            return Err(DbError::InsertColumnExistence(column.clone()));
        }
    }

    let mut ordered = vec![Literal::Null; schema.width()];
    let mut assigned = vec![false; schema.width()];
    for (column, value) in columns.iter().zip(values) {
        if let Some(index) = schema.get_index_of_column(column) {
            if !assigned[index] {
                ordered[index] = value;
                assigned[index] = true;
            }
        }
    }
    Ok(ordered)
}
