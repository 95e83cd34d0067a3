//! Immutable columnar table values used as pipeline input and output.

pub mod expr;
pub mod io;

pub use expr::{col, lit, when, Expr};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the table engine itself.
///
/// These are deliberately not reinterpreted by pipeline operations; callers
/// see the engine's own wording.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
    #[error("cannot multiply {0} by {1}")]
    InvalidArithmetic(&'static str, &'static str),
    #[error("condition evaluated to {0}, expected a boolean")]
    InvalidCondition(&'static str),
}

/// One cell of a table column.
///
/// Untagged serde representation: nulls, booleans, integers, floats, and
/// strings map onto their JSON counterparts. Dates render as ISO-8601
/// strings and reload as strings; re-deriving the date type is the job of
/// the `date` operation, not deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Date(_) => "date",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

/// An immutable table with named, ordered, equal-length columns.
///
/// Every mutation-shaped API returns a new `Table`; existing handles are
/// never changed underneath a pipeline step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Vec<Value>>,
}

impl Table {
    /// Create an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (name, cells) pairs, preserving column order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut table = Table::new();
        for (name, values) in columns {
            let name = name.into();
            if table.columns.contains_key(&name) {
                return Err(TableError::DuplicateColumn(name));
            }
            table = table.with_column(&name, values)?;
        }
        Ok(table)
    }

    /// Number of rows; zero for a table with no columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, cells)| cells.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Cells of a named column.
    pub fn column(&self, name: &str) -> Result<&[Value], TableError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Return a new table with `values` stored under `name`.
    ///
    /// An existing column of the same name is replaced in place (its position
    /// is kept); otherwise the column is appended after all current columns.
    pub fn with_column(&self, name: &str, values: Vec<Value>) -> Result<Self, TableError> {
        if !self.columns.is_empty() && values.len() != self.row_count() {
            return Err(TableError::LengthMismatch {
                name: name.to_string(),
                expected: self.row_count(),
                actual: values.len(),
            });
        }
        let mut columns = self.columns.clone();
        columns.insert(name.to_string(), values);
        Ok(Table { columns })
    }
}
