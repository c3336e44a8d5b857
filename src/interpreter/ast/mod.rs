use std::fmt;

use crate::error::Command;
use crate::interpreter::tokenizer::{scanner::Token, token::TokenTypes};

mod create_statement;
mod delete_statement;
mod describe_statement;
mod drop_statement;
mod helpers;
mod insert_statement;
mod parser;
mod select_statement;
mod statement_builder;
#[cfg(test)]
mod test_utils;

#[derive(Debug, PartialEq, Clone)]
pub enum SqlStatement {
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    Describe(DescribeStatement),
    ShowTables,
    InsertInto(InsertIntoStatement),
    Delete(DeleteStatement),
    Select(SelectStatement),
    Exit,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub columns: Vec<ColumnSpec>,
    /// Every PRIMARY KEY clause in declaration order. More than one is a
    /// schema error, not a syntax error.
    pub primary_keys: Vec<Vec<String>>,
    pub foreign_keys: Vec<ForeignKeySpec>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: DataTypeSpec,
    pub not_null: bool,
}

/// Column type as written. A char length is kept unvalidated.
#[derive(Debug, PartialEq, Clone)]
pub enum DataTypeSpec {
    Int,
    Char(i64),
    Date,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ForeignKeySpec {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DropTableStatement {
    pub table_name: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DescribeStatement {
    pub command: DescribeCommand,
    pub table_name: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DescribeCommand {
    Explain,
    Describe,
    Desc,
}

impl From<DescribeCommand> for Command {
    fn from(command: DescribeCommand) -> Self {
        match command {
            DescribeCommand::Explain => Command::Explain,
            DescribeCommand::Describe => Command::Describe,
            DescribeCommand::Desc => Command::Desc,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct InsertIntoStatement {
    pub table_name: String,
    pub columns: Option<Vec<String>>,
    pub values: Vec<Literal>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Int(i64),
    Str(String),
    Date(String),
    Null,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteStatement {
    pub table_name: String,
    pub where_clause: Option<WhereClause>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectStatement {
    /// Empty for `SELECT *`.
    pub columns: Vec<SelectItem>,
    pub from: Vec<TableReference>,
    pub joins: Vec<JoinClause>,
    pub where_clause: Option<WhereClause>,
    pub order_by: Vec<OrderByItem>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectItem {
    pub selectable: Selectable,
    pub alias: Option<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Selectable {
    Column(ColumnRef),
    Aggregate {
        function: AggregateFunction,
        column: ColumnRef,
    },
    CountAll,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AggregateFunction {
    Count,
    Sum,
    Max,
    Min,
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateFunction::Count => write!(f, "count"),
            AggregateFunction::Sum => write!(f, "sum"),
            AggregateFunction::Max => write!(f, "max"),
            AggregateFunction::Min => write!(f, "min"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TableReference {
    pub name: String,
    pub alias: Option<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct JoinClause {
    pub table_name: String,
    pub left: ColumnRef,
    pub right: ColumnRef,
}

#[derive(Debug, PartialEq, Clone)]
pub struct OrderByItem {
    pub column: ColumnRef,
    pub direction: OrderByDirection,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: Option<&str>, column: &str) -> Self {
        Self {
            table: table.map(|table| table.to_string()),
            column: column.to_string(),
        }
    }
}

/// A WHERE condition flattened to at most two predicates.
#[derive(Debug, PartialEq, Clone)]
pub enum WhereClause {
    Single(Predicate),
    And(Predicate, Predicate),
    Or(Predicate, Predicate),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Predicate {
    pub negated: bool,
    pub kind: PredicateKind,
}

#[derive(Debug, PartialEq, Clone)]
pub enum PredicateKind {
    Comparison {
        left: Operand,
        operator: Operator,
        right: Operand,
    },
    NullCheck {
        column: ColumnRef,
        is_null: bool,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Column(ColumnRef),
    Literal(Literal),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Equals,
    NotEquals,
    LessThan,
    LessEquals,
    GreaterThan,
    GreaterEquals,
}

impl Operator {
    pub fn is_ordering(&self) -> bool {
        !matches!(self, Operator::Equals | Operator::NotEquals)
    }
}

pub fn generate(tokens: Vec<Token>) -> Vec<Result<SqlStatement, String>> {
    let mut results: Vec<Result<SqlStatement, String>> = vec![];
    let mut parser = parser::Parser::new(tokens);
    loop {
        let next_statement = parser.next_statement();
        if let Some(next_statement) = next_statement {
            match next_statement {
                Err(error) => {
                    results.push(Err(error));
                    // Skip the rest of the broken statement.
                    loop {
                        match parser.current_token() {
                            Ok(token) if token.token_type == TokenTypes::EOF => break,
                            Ok(token) if token.token_type == TokenTypes::SemiColon => {
                                let _ = parser.advance_past_semicolon();
                                break;
                            }
                            Ok(_) => {
                                if parser.advance().is_err() {
                                    return results;
                                }
                            }
                            Err(_) => return results,
                        }
                    }
                }
                Ok(sql_statement) => {
                    if let Err(error) = parser.advance_past_semicolon() {
                        results.push(Err(error));
                        return results;
                    }
                    results.push(Ok(sql_statement));
                }
            }
        } else {
            break;
        }
    }
    return results;
}
