//! Column data type tags
//!
//! This module defines the kind of a value independent of its payload, used
//! for column metadata and for reporting types a driver cannot represent.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a SQL value
///
/// Mirrors [`Value`](super::value::Value) without payloads, except for the
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean
    Bool,
    /// 64-bit integer
    Int,
    /// 64-bit floating point
    Double,
    /// UTF-8 text
    Text,
    /// NULL
    Null,
    /// Type that could not be determined or is not supported
    Error(String),
}

impl DataType {
    /// Convert data type to string representation
    pub fn to_str(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::Text => "text",
            DataType::Null => "null",
            DataType::Error(_) => "error",
        }
    }

    /// Check if this is the error tag
    pub fn is_error(&self) -> bool {
        matches!(self, DataType::Error(_))
    }

    /// Map a declared SQL column type onto a tag using SQLite affinity rules.
    ///
    /// Undeclared columns (expressions) and unsupported affinities map to
    /// [`DataType::Error`].
    pub fn from_declared_type(declared: Option<&str>) -> Self {
        let Some(declared) = declared else {
            return DataType::Error("column has no declared type".to_string());
        };

        let upper = declared.to_uppercase();
        if upper.contains("BOOL") {
            DataType::Bool
        } else if upper.contains("INT") {
            DataType::Int
        } else if upper.contains("CHAR") || upper.contains("CLOB") || upper.contains("TEXT") {
            DataType::Text
        } else if upper.contains("REAL")
            || upper.contains("FLOA")
            || upper.contains("DOUB")
            || upper.contains("NUMERIC")
            || upper.contains("DECIMAL")
        {
            DataType::Double
        } else if upper.trim().is_empty() {
            DataType::Error("column has no declared type".to_string())
        } else {
            DataType::Error(format!("unsupported declared type '{}'", declared))
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Error(message) => write!(f, "error({})", message),
            DataType::Bool | DataType::Int | DataType::Double | DataType::Text | DataType::Null => {
                write!(f, "{}", self.to_str())
            }
        }
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(DataType::Bool),
            "int" | "integer" => Ok(DataType::Int),
            "double" | "real" | "float" => Ok(DataType::Double),
            "text" | "string" => Ok(DataType::Text),
            "null" => Ok(DataType::Null),
            _ => Err(format!("Invalid data type: '{}'", s)),
        }
    }
}
