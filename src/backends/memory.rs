//! In-memory scripted backend
//!
//! [`MemoryConnection`] answers statements from result sets registered ahead
//! of time. It is useful for exercising code written against [`Connection`]
//! without a database engine.
//!
//! ```rust
//! use sql_connector::prelude::*;
//! use sql_connector::backends::memory::{MemoryConnection, ResultSet};
//!
//! let conn = MemoryConnection::new();
//! conn.register(
//!     "SELECT id FROM users",
//!     ResultSet::new(["id"]).row(vec![Value::Int(7)]),
//! );
//!
//! assert_eq!(conn.query_scalar("SELECT id FROM users"), QueryResult::Success(Value::Int(7)));
//! ```

use super::buffered::BufferedCursor;
use crate::core::{
    connection::Connection, data_type::DataType, result::ExecutionResult, row::ValueRow,
    value::Value,
};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// Rows a registered statement produces
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    column_types: Option<Vec<DataType>>,
    rows: Vec<Vec<Value>>,
    failure: Option<String>,
}

impl ResultSet {
    /// Create an empty result set with the given columns
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Declare the column types instead of inferring them from the first row.
    ///
    /// The list is fitted to the column count: missing types are `Null`,
    /// extra ones are dropped.
    pub fn with_types(mut self, types: Vec<DataType>) -> Self {
        self.column_types = Some(types);
        self
    }

    /// Append a row
    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }

    /// Fail with `message` after the rows have been fetched
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn inferred_types(&self) -> Vec<DataType> {
        if let Some(types) = &self.column_types {
            let mut types = types.clone();
            types.resize(self.columns.len(), DataType::Null);
            return types;
        }
        match self.rows.first() {
            Some(first) => first.iter().map(Value::data_type).collect(),
            None => vec![DataType::Null; self.columns.len()],
        }
    }

    /// Build a fresh cursor. A row of the wrong width ends the result set
    /// with a failure at its position.
    fn open_cursor(&self) -> BufferedCursor {
        let columns: Arc<[String]> = self.columns.iter().cloned().collect();
        let mut rows = Vec::with_capacity(self.rows.len());
        let mut failure = self.failure.clone();

        for values in &self.rows {
            match ValueRow::new(Arc::clone(&columns), values.clone()) {
                Ok(row) => rows.push(row),
                Err(err) => {
                    failure = Some(err.to_string());
                    break;
                }
            }
        }

        BufferedCursor::new(columns, self.inferred_types(), rows, failure)
    }
}

#[derive(Debug, Clone)]
enum Script {
    Rows(ResultSet),
    Failure(String),
}

/// Connection that answers statements from registered scripts
#[derive(Debug, Default)]
pub struct MemoryConnection {
    scripts: RwLock<HashMap<String, Script>>,
    executed: Mutex<Vec<String>>,
}

impl MemoryConnection {
    /// Create a connection with no registered statements
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `statement` with `result_set`, replacing any earlier script
    pub fn register(&self, statement: &str, result_set: ResultSet) {
        self.scripts
            .write()
            .insert(normalize(statement), Script::Rows(result_set));
    }

    /// Make `statement` fail at execution with `message`
    pub fn register_failure(&self, statement: &str, message: impl Into<String>) {
        self.scripts
            .write()
            .insert(normalize(statement), Script::Failure(message.into()));
    }

    /// Statements executed so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().clone()
    }
}

fn normalize(statement: &str) -> String {
    statement.trim().to_string()
}

impl Connection for MemoryConnection {
    type Cursor = BufferedCursor;

    fn execute(&self, statement: &str) -> ExecutionResult<BufferedCursor> {
        let key = normalize(statement);
        self.executed.lock().push(key.clone());

        let scripts = self.scripts.read();
        match scripts.get(&key) {
            Some(Script::Rows(result_set)) => {
                tracing::debug!(statement = %key, rows = result_set.rows.len(), "executing scripted statement");
                ExecutionResult::Success(result_set.open_cursor())
            }
            Some(Script::Failure(message)) => {
                tracing::debug!(statement = %key, error = %message, "scripted statement failure");
                ExecutionResult::Failure(message.clone())
            }
            None => {
                tracing::warn!(statement = %key, "no script registered");
                ExecutionResult::Failure(format!("no result registered for statement: {}", key))
            }
        }
    }
}
