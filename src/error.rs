//! Error types for every statement outcome that is not a success.
//!
//! The `Display` output of each variant is the exact line shown to the user
//! (without the prompt prefix).

use std::fmt;

use thiserror::Error;

use crate::db::store::StoreError;

/// The clause a column or table reference was resolved from. Only changes
/// which message a resolution error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Select,
    Where,
    OrderBy,
    Join,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Select => write!(f, "SELECT"),
            Clause::Where => write!(f, "WHERE"),
            Clause::OrderBy => write!(f, "ORDER BY"),
            Clause::Join => write!(f, "JOIN"),
        }
    }
}

/// Statement spelling used in "no such table" messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DropTable,
    Explain,
    Describe,
    Desc,
    Insert,
    Delete,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::DropTable => write!(f, "Drop table"),
            Command::Explain => write!(f, "Explain"),
            Command::Describe => write!(f, "Describe"),
            Command::Desc => write!(f, "Desc"),
            Command::Insert => write!(f, "Insert"),
            Command::Delete => write!(f, "Delete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Schema,
    Resolution,
    Type,
    Constraint,
    Storage,
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Syntax error")]
    Syntax(String),

    #[error("Create table has failed: table with the same name already exists")]
    TableExists,
    #[error("Char length should be over 0")]
    CharLength,
    #[error("Create table has failed: column definition is duplicated")]
    DuplicateColumnDef,
    #[error("Create table has failed: primary key definition is duplicated")]
    DuplicatePrimaryKeyDef,
    #[error("Create table has failed: cannot define non-existing column '{0}' as primary key")]
    PrimaryKeyColumnDef(String),
    #[error("Create table has failed: cannot define non-existing column '{0}' as foreign key")]
    ForeignKeyColumnDef(String),
    #[error("Create table has failed: foreign key references non existing table or column")]
    ReferenceExistence,
    #[error("Create table has failed: foreign key references non primary key column")]
    ReferenceNonPrimaryKey,
    #[error("Create table has failed: foreign key references wrong type")]
    ReferenceType,
    #[error("Drop table has failed: '{0}' is referenced by another table")]
    DropReferencedTable(String),
    #[error("{0} has failed: no such table")]
    NoSuchTable(Command),

    #[error("Select has failed: '{0}' does not exist")]
    SelectTableExistence(String),
    #[error("Select has failed: fail to resolve '{0}'")]
    SelectColumnResolve(String),
    #[error(
        "Select has failed: column '{0}' must either be included in the GROUP BY clause or be used in an aggregate function"
    )]
    SelectColumnNotGrouped(String),
    #[error("{0} clause trying to reference tables which are not specified")]
    TableNotSpecified(Clause),
    #[error("{0} clause trying to reference non existing column")]
    ColumnNotExist(Clause),
    #[error("{0} clause contains ambiguous column reference")]
    AmbiguousReference(Clause),
    #[error("Insert has failed: '{0}' does not exist")]
    InsertColumnExistence(String),

    #[error("Trying to compare incomparable columns or values")]
    Incomparable,
    #[error("Insert has failed: types are not matched")]
    InsertTypeMismatch,

    #[error("Insert has failed: '{0}' is not nullable")]
    InsertColumnNonNullable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("Storage error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Storage error: corrupt record `{0}`")]
    CorruptRecord(String),
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::Syntax(_) => ErrorKind::Syntax,
            DbError::TableExists
            | DbError::CharLength
            | DbError::DuplicateColumnDef
            | DbError::DuplicatePrimaryKeyDef
            | DbError::PrimaryKeyColumnDef(_)
            | DbError::ForeignKeyColumnDef(_)
            | DbError::ReferenceExistence
            | DbError::ReferenceNonPrimaryKey
            | DbError::ReferenceType
            | DbError::DropReferencedTable(_)
            | DbError::NoSuchTable(_) => ErrorKind::Schema,
            DbError::SelectTableExistence(_)
            | DbError::SelectColumnResolve(_)
            | DbError::SelectColumnNotGrouped(_)
            | DbError::TableNotSpecified(_)
            | DbError::ColumnNotExist(_)
            | DbError::AmbiguousReference(_)
            | DbError::InsertColumnExistence(_) => ErrorKind::Resolution,
            DbError::Incomparable | DbError::InsertTypeMismatch => ErrorKind::Type,
            DbError::InsertColumnNonNullable(_) => ErrorKind::Constraint,
            DbError::Storage(_) | DbError::Encoding(_) | DbError::CorruptRecord(_) => {
                ErrorKind::Storage
            }
        }
    }
}

pub type DbResult<T> = Result<T, DbError>;
