//! Core data model types.
//!
//! Loading produces a [`Dataset`] of typed [`Row`]s. The reducers in [`crate::processing`] work on
//! loosely typed [`Value`] columns and hand back [`Extremum`]s carrying coerced [`Number`]s.

use std::cmp::Ordering;
use std::fmt;

/// A single loosely typed scalar, as accepted by the converters and reducers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string, possibly holding a number.
    Utf8(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{}", Number::Float(*v)),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(v) => Value::Int64(v),
            Number::Float(v) => Value::Float64(v),
        }
    }
}

/// A coerced numeric value.
///
/// Integers stay integers so that `find_min([3, 1, 1, 5])` answers with `1`, not `1.0`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

/// Integers print bare; floats always keep a fractional part (`0.0`, `15.6`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{v:.1}")
            }
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Result of [`crate::processing::find_min`] / [`crate::processing::find_max`]: the extremal
/// value and its position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: Number,
    pub index: usize,
}

/// One day's weather record. Temperatures are in degrees Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// ISO-8601 date string, as read from the source.
    pub date: String,
    pub min_temperature: i64,
    pub max_temperature: i64,
}

impl Row {
    pub fn new(date: impl Into<String>, min_temperature: i64, max_temperature: i64) -> Self {
        Self {
            date: date.into(),
            min_temperature,
            max_temperature,
        }
    }
}

/// Ordered collection of [`Row`]s for a reporting period, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn as_slice(&self) -> &[Row] {
        &self.rows
    }

    /// Minimum temperatures as a reducer-ready column, index-aligned with `rows`.
    pub fn min_temperatures(&self) -> Vec<Value> {
        min_column(&self.rows)
    }

    /// Maximum temperatures as a reducer-ready column, index-aligned with `rows`.
    pub fn max_temperatures(&self) -> Vec<Value> {
        max_column(&self.rows)
    }

    /// Dates column, index-aligned with `rows`.
    pub fn dates(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.date.as_str()).collect()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

pub(crate) fn min_column(rows: &[Row]) -> Vec<Value> {
    rows.iter().map(|r| Value::Int64(r.min_temperature)).collect()
}

pub(crate) fn max_column(rows: &[Row]) -> Vec<Value> {
    rows.iter().map(|r| Value::Int64(r.max_temperature)).collect()
}
