//! SQLite database backend implementation
//!
//! This module provides a SQLite implementation of the [`Connection`] trait.
//! Rows are read when the statement executes and replayed by a
//! [`BufferedCursor`].

use super::buffered::BufferedCursor;
use crate::core::{
    config::ConnectionConfig, connection::Connection, data_type::DataType, error::DatabaseError,
    error::Result, result::ExecutionResult, row::ValueRow, value::Value,
};
use rusqlite::types::ValueRef;
use rusqlite::OpenFlags;
use std::sync::Arc;
use std::time::Duration;

/// Cursor returned by [`SqliteConnection`]
pub type SqliteCursor = BufferedCursor;

/// SQLite connection
pub struct SqliteConnection {
    connection: rusqlite::Connection,
    config: ConnectionConfig,
}

impl SqliteConnection {
    /// Open a connection with the given configuration
    pub fn open(config: ConnectionConfig) -> Result<Self> {
        config.validate()?;

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::default()
        };
        let connection = rusqlite::Connection::open_with_flags(&config.path, flags)?;

        let foreign_keys = if config.foreign_keys { "ON" } else { "OFF" };
        connection.execute(&format!("PRAGMA foreign_keys = {}", foreign_keys), [])?;
        if let Some(timeout_ms) = config.busy_timeout_ms {
            connection.busy_timeout(Duration::from_millis(timeout_ms))?;
        }

        tracing::debug!(
            path = %config.path,
            read_only = config.read_only,
            foreign_keys = config.foreign_keys,
            "opened sqlite connection"
        );

        Ok(Self { connection, config })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(ConnectionConfig::in_memory())
    }

    /// Configuration the connection was opened with
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Run one or more statements that return no rows
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql)?;
        Ok(())
    }

    fn decode_value(value: ValueRef<'_>, column: &str, declared: &DataType) -> Value {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) if *declared == DataType::Bool => Value::Bool(v != 0),
            ValueRef::Integer(v) => Value::Int(v),
            ValueRef::Real(v) => Value::Double(v),
            ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => Value::Text(text.to_string()),
                Err(err) => Value::Error(format!("invalid UTF-8 in column '{}': {}", column, err)),
            },
            ValueRef::Blob(_) => {
                Value::Error(format!("unsupported blob value in column '{}'", column))
            }
        }
    }

    fn decode_row(
        row: &rusqlite::Row<'_>,
        columns: &Arc<[String]>,
        column_types: &[DataType],
    ) -> Result<ValueRow> {
        let mut values = Vec::with_capacity(columns.len());
        for (index, (column, declared)) in columns.iter().zip(column_types).enumerate() {
            values.push(Self::decode_value(row.get_ref(index)?, column, declared));
        }
        ValueRow::new(Arc::clone(columns), values)
    }
}

impl Connection for SqliteConnection {
    type Cursor = SqliteCursor;

    /// Statements without result columns (DML, DDL) fail the execution when a
    /// step errors. For queries a step error is the cursor's terminal
    /// failure, reported after the rows already read.
    fn execute(&self, statement: &str) -> ExecutionResult<SqliteCursor> {
        tracing::debug!(statement, "executing statement");

        let mut stmt = match self.connection.prepare(statement) {
            Ok(stmt) => stmt,
            Err(err) => {
                tracing::debug!(statement, error = %err, "statement could not be prepared");
                return ExecutionResult::Failure(err.to_string());
            }
        };

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let column_types: Vec<DataType> = stmt
            .columns()
            .iter()
            .map(|column| DataType::from_declared_type(column.decl_type()))
            .collect();

        let mut rows = match stmt.query([]) {
            Ok(rows) => rows,
            Err(err) => return ExecutionResult::Failure(err.to_string()),
        };

        let mut fetched = Vec::new();
        let mut failure = None;
        loop {
            let step = rows.next().map_err(DatabaseError::from).and_then(|row| {
                row.map(|row| Self::decode_row(row, &columns, &column_types))
                    .transpose()
            });
            match step {
                Ok(Some(row)) => fetched.push(row),
                Ok(None) => break,
                Err(err) if columns.is_empty() => {
                    tracing::debug!(statement, error = %err, "statement failed");
                    return ExecutionResult::Failure(err.to_string());
                }
                Err(err) => {
                    tracing::debug!(statement, rows = fetched.len(), error = %err, "row fetch failed");
                    failure = Some(err.to_string());
                    break;
                }
            }
        }

        tracing::trace!(statement, rows = fetched.len(), "statement complete");
        ExecutionResult::Success(BufferedCursor::new(columns, column_types, fetched, failure))
    }
}
