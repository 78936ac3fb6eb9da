//! Table representation for validation.
//!
//! The engine consumes an already-materialized table: an ordered set of
//! named columns, each holding scalar values of a single logical type.
//! Loading raw bytes and parsing file formats happens upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value in a column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int64",
            Value::Float(_) => "float64",
            Value::Str(_) => "string",
        }
    }

    /// Attempts to get this value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

// Equality is type-sensitive across string/number (so `1` and `"1"` are
// distinct enum members) but numeric across int/float.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A named column of values, preserving source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within a table
    pub name: String,
    /// Values in row order, index-addressable 0..N-1
    values: Vec<Value>,
}

impl Column {
    /// Creates a column from a name and values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the number of rows in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the value at a row index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Iterates over `(row_index, value)` pairs in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.values.iter().enumerate()
    }
}

/// An ordered collection of named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Iterates over the columns in table order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Adds a column to the table.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Returns the column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

impl FromIterator<Column> for Table {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Str("test".into()).type_name(), "string");
        assert_eq!(Value::Int(42).type_name(), "int64");
        assert_eq!(Value::Float(3.5).type_name(), "float64");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
    }

    #[test]
    fn test_value_conversions() {
        let val = Value::Str("hello".into());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_f64(), None);

        let val = Value::Int(42);
        assert_eq!(val.as_f64(), Some(42.0));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_value_equality_is_type_sensitive() {
        assert_ne!(Value::Int(1), Value::Str("1".into()));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_eq!(Value::Str("a".into()), Value::Str("a".into()));
    }

    #[test]
    fn test_value_equality_numeric_widening() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Float(2.0), Value::Int(2));
        assert_ne!(Value::Int(1), Value::Float(1.5));
    }

    #[test]
    fn test_column_rows_preserve_order() {
        let col = Column::new("id", vec![Value::Int(1), Value::Null, Value::Int(3)]);
        let rows: Vec<_> = col.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (0, &Value::Int(1)));
        assert!(rows[1].1.is_null());
        assert_eq!(rows[2], (2, &Value::Int(3)));
    }

    #[test]
    fn test_table_lookup() {
        let table = Table::new(vec![
            Column::new("id", vec![Value::Int(1)]),
            Column::new("name", vec![Value::Str("a".into())]),
        ]);

        assert_eq!(table.width(), 2);
        assert!(table.has_column("id"));
        assert!(!table.has_column("missing"));
        assert_eq!(table.column("name").unwrap().len(), 1);
        assert_eq!(table.column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_value_untagged_deserialization() {
        let v: Value = serde_json::from_str("1").unwrap();
        assert_eq!(v, Value::Int(1));
        let v: Value = serde_json::from_str("1.5").unwrap();
        assert_eq!(v, Value::Float(1.5));
        let v: Value = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(v, Value::Str("1".into()));
        let v: Value = serde_json::from_str("null").unwrap();
        assert!(v.is_null());
    }
}
