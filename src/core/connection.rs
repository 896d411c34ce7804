//! Connection trait
//!
//! This module defines the statement execution capability every driver
//! provides. Application code depends on this trait, never on a driver type.

use super::cursor::Cursor;
use super::result::{ExecutionResult, QueryResult};
use super::value::Value;

/// A database connection able to execute statements
///
/// Execution is synchronous. A driver may allow only one outstanding cursor
/// per connection; callers must not interleave fetches against the same
/// connection in that case.
pub trait Connection {
    /// Cursor produced by a successful execution
    type Cursor: Cursor;

    /// Execute `statement`.
    ///
    /// `Failure` means the statement could not begin (bad SQL, connection
    /// down). Errors while reading rows are reported by the cursor.
    fn execute(&self, statement: &str) -> ExecutionResult<Self::Cursor>;

    /// Execute `statement` and return the first value of its first row
    fn query_scalar(&self, statement: &str) -> QueryResult<Value> {
        match self.execute(statement) {
            ExecutionResult::Success(mut cursor) => cursor.fetch_scalar(),
            ExecutionResult::Failure(message) => QueryResult::Failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::{MemoryConnection, ResultSet};

    #[test]
    fn test_query_scalar_reports_execution_failure() {
        let conn = MemoryConnection::new();
        conn.register_failure("SELEC 1", "near \"SELEC\": syntax error");
        assert_eq!(
            conn.query_scalar("SELEC 1"),
            QueryResult::Failure("near \"SELEC\": syntax error".into())
        );
    }

    #[test]
    fn test_query_scalar_reads_first_value() {
        let conn = MemoryConnection::new();
        conn.register(
            "SELECT a, b FROM t",
            ResultSet::new(["a", "b"])
                .row(vec![Value::Int(3), Value::Int(4)])
                .row(vec![Value::Int(5), Value::Int(6)]),
        );
        assert_eq!(conn.query_scalar("SELECT a, b FROM t"), QueryResult::Success(Value::Int(3)));
    }

    #[test]
    fn test_query_scalar_without_rows() {
        let conn = MemoryConnection::new();
        conn.register("SELECT a FROM empty", ResultSet::new(["a"]));
        assert_eq!(
            conn.query_scalar("SELECT a FROM empty"),
            QueryResult::Failure("no rows".into())
        );
    }
}
