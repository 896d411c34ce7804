//! Database value types
//!
//! This module defines the values a driver decodes from column cells and the
//! lossy conversions applications use to read them.

use super::data_type::DataType;
use serde::{Deserialize, Serialize};

/// A single SQL datum
///
/// `Null` and `Error` carry nothing convertible: every conversion accessor
/// returns `None` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit floating point
    Double(f64),
    /// Text value
    Text(String),
    /// Null value
    Null,
    /// The cell could not be fetched or decoded into a supported type
    Error(String),
}

impl Value {
    /// Textual form of the value.
    ///
    /// Booleans render as `true`/`false`, doubles always keep a fraction or
    /// exponent (`1.0`, `1e100`).
    pub fn string_value(&self) -> Option<String> {
        match self {
            Value::Bool(v) => Some(v.to_string()),
            Value::Int(v) => Some(v.to_string()),
            Value::Double(v) => Some(format!("{:?}", v)),
            Value::Text(v) => Some(v.clone()),
            Value::Null | Value::Error(_) => None,
        }
    }

    /// Boolean form of the value.
    ///
    /// Numbers are `false` when zero and `true` otherwise. Text is never
    /// interpreted as a boolean.
    pub fn bool_value(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            Value::Int(v) => Some(*v != 0),
            Value::Double(v) => Some(*v != 0.0),
            Value::Text(_) => None,
            Value::Null | Value::Error(_) => None,
        }
    }

    /// Integer form of the value.
    ///
    /// Doubles truncate toward zero; NaN, infinities and doubles outside the
    /// `i64` range have no integer form.
    pub fn int_value(&self) -> Option<i64> {
        match self {
            Value::Bool(v) => Some(i64::from(*v)),
            Value::Int(v) => Some(*v),
            Value::Double(v) => truncate_to_int(*v),
            Value::Text(v) => v.parse().ok(),
            Value::Null | Value::Error(_) => None,
        }
    }

    /// Floating point form of the value.
    pub fn double_value(&self) -> Option<f64> {
        match self {
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Int(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::Text(v) => v.parse().ok(),
            Value::Null | Value::Error(_) => None,
        }
    }

    /// Borrow the text payload without conversion
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            Value::Bool(_) | Value::Int(_) | Value::Double(_) | Value::Null | Value::Error(_) => {
                None
            }
        }
    }

    /// Message of an `Error` value
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Error(message) => Some(message.as_str()),
            Value::Bool(_) | Value::Int(_) | Value::Double(_) | Value::Text(_) | Value::Null => {
                None
            }
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if the value marks a decoding failure
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Data type tag of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Int(_) => DataType::Int,
            Value::Double(_) => DataType::Double,
            Value::Text(_) => DataType::Text,
            Value::Null => DataType::Null,
            Value::Error(message) => DataType::Error(message.clone()),
        }
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => DataType::Bool.to_str(),
            Value::Int(_) => DataType::Int.to_str(),
            Value::Double(_) => DataType::Double.to_str(),
            Value::Text(_) => DataType::Text.to_str(),
            Value::Null => DataType::Null.to_str(),
            Value::Error(_) => "error",
        }
    }
}

// i64::MIN and 2^63 are both exact in f64.
fn truncate_to_int(v: f64) -> Option<i64> {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);

    if v.is_finite() && v >= LOWER && v < UPPER {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}
