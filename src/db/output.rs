//! Rendering of statement outcomes into the lines shown to the user.

use std::fmt;

use crate::db::table::core::column::ColumnDefinition;

const DESCRIBE_BORDER_WIDTH: usize = 64;
const TABLE_LIST_BORDER_WIDTH: usize = 24;

#[derive(Debug, PartialEq, Clone)]
pub enum StatementOutput {
    TableCreated(String),
    TableDropped(String),
    Described(Vec<ColumnDefinition>),
    TablesListed(Vec<String>),
    Inserted,
    Deleted(usize),
    Selected(QueryResult),
    Exit,
}

impl StatementOutput {
    /// Single-line outcomes are shown after the prompt; listings are not.
    pub fn is_message(&self) -> bool {
        matches!(
            self,
            StatementOutput::TableCreated(_)
                | StatementOutput::TableDropped(_)
                | StatementOutput::Inserted
                | StatementOutput::Deleted(_)
        )
    }
}

/// Rendered SELECT output: one header per column and the cell text of each row.
#[derive(Debug, PartialEq, Clone)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn row_count_line(count: usize) -> String {
    format!("{} row{} in set", count, plural(count))
}

impl fmt::Display for StatementOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementOutput::TableCreated(table_name) => {
                write!(f, "'{}' table is created", table_name)
            }
            StatementOutput::TableDropped(table_name) => {
                write!(f, "'{}' table is dropped", table_name)
            }
            StatementOutput::Described(columns) => {
                let border = "-".repeat(DESCRIBE_BORDER_WIDTH);
                writeln!(f, "{}", border)?;
                writeln!(
                    f,
                    "{:<20}| {:<11}| {:<11}| {:<17}",
                    "column_name", "type", "null", "key"
                )?;
                for column in columns {
                    writeln!(
                        f,
                        "{:<20}| {:<11}| {:<11}| {:<17}",
                        column.name,
                        column.data_type.to_string(),
                        column.null_label(),
                        column.key_label()
                    )?;
                }
                writeln!(f, "{}", border)?;
                write!(f, "{}", row_count_line(columns.len()))
            }
            StatementOutput::TablesListed(table_names) => {
                let border = "-".repeat(TABLE_LIST_BORDER_WIDTH);
                writeln!(f, "{}", border)?;
                for table_name in table_names {
                    writeln!(f, "{}", table_name)?;
                }
                writeln!(f, "{}", border)?;
                write!(f, "{}", row_count_line(table_names.len()))
            }
            StatementOutput::Inserted => write!(f, "1 row inserted"),
            StatementOutput::Deleted(count) => {
                write!(f, "{} row{} deleted", count, plural(*count))
            }
            StatementOutput::Selected(result) => write!(f, "{}", result),
            StatementOutput::Exit => Ok(()),
        }
    }
}

impl QueryResult {
    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, " {} ", padded.join(" | "))
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let border = "-".repeat(widths.iter().map(|width| width + 3).sum::<usize>() + 1);
        writeln!(f, "{}", border)?;
        // An empty result shows only the borders.
        if !self.rows.is_empty() {
            write_line(f, &self.headers, &widths)?;
        }
        for row in self.rows.iter() {
            write_line(f, row, &widths)?;
        }
        writeln!(f, "{}", border)?;
        write!(f, "{}", row_count_line(self.rows.len()))
    }
}
