use std::collections::{BTreeMap, HashSet};

use tracing::info;

use crate::db::catalog::ForeignKeyRelation;
use crate::db::database::Database;
use crate::db::table::core::{column::ColumnDefinition, schema::TableSchema, value::DataType};
use crate::error::{DbError, DbResult};
use crate::interpreter::ast::{ColumnSpec, CreateTableStatement, DataTypeSpec, ForeignKeySpec};

/// Validates the definition in full, then writes relation records, the
/// schema and an empty row sequence. Returns the new table's name.
pub fn create_table(database: &mut Database, statement: CreateTableStatement) -> DbResult<String> {
    if database.has_table(&statement.table_name)? {
        return Err(DbError::TableExists);
    }

    let mut columns = statement
        .columns
        .iter()
        .map(column_definition)
        .collect::<DbResult<Vec<ColumnDefinition>>>()?;

    let mut seen = HashSet::new();
    if !columns.iter().all(|column| seen.insert(column.name.as_str())) {
        return Err(DbError::DuplicateColumnDef);
    }

    if statement.primary_keys.len() > 1 {
        return Err(DbError::DuplicatePrimaryKeyDef);
    }
    let primary_key = statement.primary_keys.first().cloned().unwrap_or_default();
    for column_name in primary_key.iter() {
        if !columns.iter().any(|column| &column.name == column_name) {
            return Err(DbError::PrimaryKeyColumnDef(column_name.clone()));
        }
    }

    let mut relations: Vec<ForeignKeyRelation> = vec![];
    for foreign_key in statement.foreign_keys.iter() {
        relations.push(validate_foreign_key(
            database,
            &statement.table_name,
            &columns,
            foreign_key,
        )?);
    }

    for column in columns.iter_mut() {
        if primary_key.contains(&column.name) {
            column.primary_key = true;
            column.not_null = true;
        }
        if statement
            .foreign_keys
            .iter()
            .any(|foreign_key| foreign_key.columns.contains(&column.name))
        {
            column.foreign_key = true;
        }
    }

    for relation in relations.iter() {
        database.put_relation(relation)?;
    }
    let schema = TableSchema::new(&statement.table_name, columns);
    database.put_schema(&schema)?;
    database.put_rows(&schema, &[])?;
    info!(table = %schema.name, "table created");
    Ok(schema.name)
}

fn column_definition(spec: &ColumnSpec) -> DbResult<ColumnDefinition> {
    let data_type = match spec.data_type {
        DataTypeSpec::Int => DataType::Int,
        DataTypeSpec::Date => DataType::Date,
        DataTypeSpec::Char(length) if length > 0 => {
            DataType::Char(usize::try_from(length).map_err(|_| DbError::CharLength)?)
        }
        DataTypeSpec::Char(_) => return Err(DbError::CharLength),
    };
    let mut column = ColumnDefinition::new(&spec.name, data_type);
    column.not_null = spec.not_null;
    Ok(column)
}

fn validate_foreign_key(
    database: &Database,
    table_name: &str,
    columns: &[ColumnDefinition],
    foreign_key: &ForeignKeySpec,
) -> DbResult<ForeignKeyRelation> {
    let mut child_types: Vec<&DataType> = vec![];
    for column_name in foreign_key.columns.iter() {
        let column = columns
            .iter()
            .find(|column| &column.name == column_name)
            .ok_or_else(|| DbError::ForeignKeyColumnDef(column_name.clone()))?;
        child_types.push(&column.data_type);
    }

    // The table being created is not in the catalog yet, so a
    // self-reference is dangling.
    let parent = database
        .get_schema(&foreign_key.referenced_table)?
        .ok_or(DbError::ReferenceExistence)?;

    let mut parent_types: Vec<&DataType> = vec![];
    for column_name in foreign_key.referenced_columns.iter() {
        let column = parent
            .get_column(column_name)
            .ok_or(DbError::ReferenceExistence)?;
        parent_types.push(&column.data_type);
    }

    let mut referenced: Vec<&str> = foreign_key
        .referenced_columns
        .iter()
        .map(|column| column.as_str())
        .collect();
    let mut primary_key = parent.primary_key_columns();
    referenced.sort_unstable();
    primary_key.sort_unstable();
    if referenced != primary_key {
        return Err(DbError::ReferenceNonPrimaryKey);
    }

    if child_types != parent_types {
        return Err(DbError::ReferenceType);
    }

    Ok(ForeignKeyRelation {
        child_table: table_name.to_string(),
        parent_table: parent.name.clone(),
        columns: foreign_key
            .columns
            .iter()
            .cloned()
            .zip(foreign_key.referenced_columns.iter().cloned())
            .collect::<BTreeMap<String, String>>(),
    })
}
