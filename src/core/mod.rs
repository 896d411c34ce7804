//! Core connector types and traits
//!
//! This module provides the value model, the row and cursor contracts, the
//! execution and fetch results, and the configuration and error types shared
//! by every driver.

pub mod config;
pub mod connection;
pub mod cursor;
pub mod data_type;
pub mod error;
pub mod result;
pub mod row;
pub mod value;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use connection::Connection;
pub use cursor::{Cursor, CursorState, Rows};
pub use data_type::DataType;
pub use error::{DatabaseError, Result};
pub use result::{ExecutionResult, FetchResult, QueryResult};
pub use row::{rows_equal, Row, ValueRow};
pub use value::Value;
