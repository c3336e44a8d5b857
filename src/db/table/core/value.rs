use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declared column type.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    Int,
    Char(usize),
    Date,
}

/// Comparability class of a column or literal. Every `char(n)` column and
/// every string literal share the `Char` family.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeFamily {
    Int,
    Char,
    Date,
}

impl DataType {
    pub fn family(&self) -> TypeFamily {
        match self {
            DataType::Int => TypeFamily::Int,
            DataType::Char(_) => TypeFamily::Char,
            DataType::Date => TypeFamily::Date,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Char(length) => write!(f, "char({})", length),
            DataType::Date => write!(f, "date"),
        }
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.to_string()
    }
}

impl TryFrom<String> for DataType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "int" => Ok(DataType::Int),
            "date" => Ok(DataType::Date),
            other => other
                .strip_prefix("char(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|length| length.parse::<usize>().ok())
                .map(DataType::Char)
                .ok_or_else(|| format!("unknown data type `{}`", other)),
        }
    }
}

/// A stored cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Char(String),
    /// Date text exactly as it was inserted.
    Date(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Compares two non-null values of the same family. Returns `None` for
    /// NULL operands or mismatched families.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(compare_dates(a, b)),
            _ => None,
        }
    }

    /// Total order used by ORDER BY: NULL sorts below every other value.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (first, second) => first.compare(second).unwrap_or(Ordering::Equal),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(val) => serde_json::Value::from(*val),
            Value::Char(val) | Value::Date(val) => serde_json::Value::from(val.as_str()),
            Value::Null => serde_json::Value::Null,
        }
    }

    /// Decodes a stored cell for a column of `data_type`.
    pub fn from_json(json: &serde_json::Value, data_type: &DataType) -> Option<Value> {
        match (json, data_type) {
            (serde_json::Value::Null, _) => Some(Value::Null),
            (serde_json::Value::Number(num), DataType::Int) => num.as_i64().map(Value::Int),
            (serde_json::Value::String(val), DataType::Char(_)) => Some(Value::Char(val.clone())),
            (serde_json::Value::String(val), DataType::Date) => Some(Value::Date(val.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(val) => write!(f, "{}", val),
            Value::Char(val) | Value::Date(val) => write!(f, "{}", val),
            Value::Null => write!(f, "null"),
        }
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

// Unparsable date text falls back to text order, which is chronological for
// zero-padded YYYY-MM-DD.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(first), Some(second)) => first.cmp(&second),
        _ => a.cmp(b),
    }
}
