//! Alias to schema bindings and column reference resolution.

use crate::db::table::core::{column::ColumnDefinition, schema::TableSchema};
use crate::error::{Clause, DbError, DbResult};
use crate::interpreter::ast::ColumnRef;

#[derive(Debug, Clone)]
pub struct Binding {
    pub alias: String,
    pub schema: TableSchema,
}

/// Ordered alias bindings. A combined row holds every binding's columns back
/// to back in binding order.
#[derive(Debug, Clone, Default)]
pub struct BindingContext {
    bindings: Vec<Binding>,
    single_table: bool,
}

/// A column reference resolved to its binding and its position in a combined row.
#[derive(Debug, PartialEq, Clone)]
pub struct ResolvedColumn<'a> {
    pub alias: &'a str,
    pub definition: &'a ColumnDefinition,
    pub index: usize,
}

impl BindingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The context of a single-table statement. Its qualifiers are all
    /// checked before any column is looked up.
    pub fn single(schema: TableSchema) -> Self {
        Self {
            bindings: vec![Binding {
                alias: schema.name.clone(),
                schema,
            }],
            single_table: true,
        }
    }

    pub fn is_single_table(&self) -> bool {
        self.single_table
    }

    /// Binds `alias`. Rebinding an existing alias replaces it in place.
    pub fn bind(&mut self, alias: &str, schema: TableSchema) {
        let binding = Binding {
            alias: alias.to_string(),
            schema,
        };
        match self.bindings.iter_mut().find(|existing| existing.alias == alias) {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.position_of(alias).is_some()
    }

    fn position_of(&self, alias: &str) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.alias == alias)
    }

    fn offset(&self, position: usize) -> usize {
        self.bindings[..position]
            .iter()
            .map(|binding| binding.schema.width())
            .sum()
    }

    fn resolved(&self, position: usize, column_index: usize) -> ResolvedColumn<'_> {
        let binding = &self.bindings[position];
        ResolvedColumn {
            alias: &binding.alias,
            definition: &binding.schema.columns[column_index],
            index: self.offset(position) + column_index,
        }
    }

    /// Every bound column in binding order, then column order.
    pub fn all_columns(&self) -> Vec<ResolvedColumn<'_>> {
        let mut columns = vec![];
        for (position, binding) in self.bindings.iter().enumerate() {
            for column_index in 0..binding.schema.width() {
                columns.push(self.resolved(position, column_index));
            }
        }
        columns
    }

    pub fn resolve(&self, column: &ColumnRef, clause: Clause) -> DbResult<ResolvedColumn<'_>> {
        let missing = || match clause {
            Clause::Select => DbError::SelectColumnResolve(column.column.clone()),
            _ => DbError::ColumnNotExist(clause),
        };

        if let Some(alias) = &column.table {
            let position = self
                .position_of(alias)
                .ok_or(DbError::TableNotSpecified(clause))?;
            let column_index = self.bindings[position]
                .schema
                .get_index_of_column(&column.column)
                .ok_or_else(missing)?;
            return Ok(self.resolved(position, column_index));
        }

        let mut found = self.bindings.iter().enumerate().filter_map(|(position, binding)| {
            binding
                .schema
                .get_index_of_column(&column.column)
                .map(|column_index| (position, column_index))
        });
        let (position, column_index) = found.next().ok_or_else(missing)?;
        if found.next().is_some() {
            return Err(match clause {
                Clause::Select => DbError::SelectColumnResolve(column.column.clone()),
                _ => DbError::AmbiguousReference(clause),
            });
        }
        Ok(self.resolved(position, column_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::core::value::DataType;
    use crate::db::table::test_utils::{orders_schema, users_schema};

    fn context() -> BindingContext {
        let mut context = BindingContext::new();
        context.bind("u", users_schema());
        context.bind("orders", orders_schema());
        context
    }

    #[test]
    fn qualified_reference_resolves_to_combined_index() {
        let context = context();
        let resolved = context
            .resolve(&ColumnRef::new(Some("orders"), "item"), Clause::Where)
            .unwrap();
        assert_eq!("orders", resolved.alias);
        assert_eq!(DataType::Char(20), resolved.definition.data_type);
        assert_eq!(5, resolved.index);
    }

    #[test]
    fn unqualified_reference_scans_every_binding() {
        let context = context();
        let resolved = context
            .resolve(&ColumnRef::new(None, "joined"), Clause::OrderBy)
            .unwrap();
        assert_eq!("u", resolved.alias);
        assert_eq!(2, resolved.index);
    }

    #[test]
    fn resolution_errors_follow_clause() {
        let mut context = context();
        context.bind("other", users_schema());
        let unknown_alias = context.resolve(&ColumnRef::new(Some("x"), "id"), Clause::Join);
        assert!(matches!(unknown_alias, Err(DbError::TableNotSpecified(Clause::Join))));
        let missing = context.resolve(&ColumnRef::new(Some("u"), "age"), Clause::Where);
        assert!(matches!(missing, Err(DbError::ColumnNotExist(Clause::Where))));
        let ambiguous = context.resolve(&ColumnRef::new(None, "name"), Clause::OrderBy);
        assert!(matches!(ambiguous, Err(DbError::AmbiguousReference(Clause::OrderBy))));
    }

    #[test]
    fn select_context_reports_fail_to_resolve() {
        let mut context = context();
        context.bind("other", users_schema());
        let missing = context.resolve(&ColumnRef::new(None, "age"), Clause::Select);
        assert_eq!(
            "Select has failed: fail to resolve 'age'",
            missing.unwrap_err().to_string()
        );
        let ambiguous = context.resolve(&ColumnRef::new(None, "name"), Clause::Select);
        assert_eq!(
            "Select has failed: fail to resolve 'name'",
            ambiguous.unwrap_err().to_string()
        );
        let unknown_alias = context.resolve(&ColumnRef::new(Some("x"), "id"), Clause::Select);
        assert!(matches!(unknown_alias, Err(DbError::TableNotSpecified(Clause::Select))));
    }

    #[test]
    fn rebinding_an_alias_replaces_it_in_place() {
        let mut context = context();
        context.bind("u", orders_schema());
        let aliases: Vec<&str> = context.bindings().iter().map(|b| b.alias.as_str()).collect();
        assert_eq!(vec!["u", "orders"], aliases);
        assert_eq!("orders", context.bindings()[0].schema.name);
        assert_eq!(8, context.all_columns().len());
    }
}
