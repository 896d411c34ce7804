//! Execution and fetch results
//!
//! Statement failures, fetch failures and scalar results each have their own
//! enum so the three failure channels never mix. All of them carry a plain
//! message; `into_result` turns them into [`DatabaseError`]s when a caller
//! prefers `?`.

use super::error::{DatabaseError, Result};
use super::row::{rows_equal, Row, ValueRow};

/// Outcome of asking a cursor for its next row
#[derive(Debug, Clone)]
pub enum FetchResult<R = ValueRow> {
    /// No more rows
    Empty,
    /// A row was fetched
    Data(R),
    /// The row could not be fetched
    Failure(String),
}

impl<R> FetchResult<R> {
    /// Returns `true` if there are no more rows
    pub fn is_empty(&self) -> bool {
        matches!(self, FetchResult::Empty)
    }

    /// Returns `true` if the fetch failed
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure(_))
    }

    /// Returns `true` for `Empty` and `Failure`, after which a cursor yields no rows
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchResult::Data(_))
    }

    /// Borrow the fetched row
    pub fn row(&self) -> Option<&R> {
        match self {
            FetchResult::Data(row) => Some(row),
            FetchResult::Empty | FetchResult::Failure(_) => None,
        }
    }

    /// Take the fetched row
    pub fn into_row(self) -> Option<R> {
        match self {
            FetchResult::Data(row) => Some(row),
            FetchResult::Empty | FetchResult::Failure(_) => None,
        }
    }

    /// Failure message, if any
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FetchResult::Failure(message) => Some(message.as_str()),
            FetchResult::Empty | FetchResult::Data(_) => None,
        }
    }
}

impl<A: Row, B: Row> PartialEq<FetchResult<B>> for FetchResult<A> {
    fn eq(&self, other: &FetchResult<B>) -> bool {
        match (self, other) {
            (FetchResult::Empty, FetchResult::Empty) => true,
            (FetchResult::Data(left), FetchResult::Data(right)) => rows_equal(left, right),
            (FetchResult::Failure(left), FetchResult::Failure(right)) => left == right,
            (FetchResult::Empty, FetchResult::Data(_) | FetchResult::Failure(_))
            | (FetchResult::Data(_), FetchResult::Empty | FetchResult::Failure(_))
            | (FetchResult::Failure(_), FetchResult::Empty | FetchResult::Data(_)) => false,
        }
    }
}

/// Outcome of executing a statement
#[derive(Debug)]
pub enum ExecutionResult<C> {
    /// The statement started; rows are read from the cursor
    Success(C),
    /// The statement could not begin executing
    Failure(String),
}

impl<C> ExecutionResult<C> {
    /// Returns `true` if the statement failed
    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionResult::Failure(_))
    }

    /// Returns `true` if the statement produced a cursor
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success(_))
    }

    /// Failure message, if any
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ExecutionResult::Failure(message) => Some(message.as_str()),
            ExecutionResult::Success(_) => None,
        }
    }

    /// Convert into a `Result`, mapping failure to [`DatabaseError::QueryError`]
    pub fn into_result(self) -> Result<C> {
        match self {
            ExecutionResult::Success(cursor) => Ok(cursor),
            ExecutionResult::Failure(message) => Err(DatabaseError::query(message)),
        }
    }
}

impl<C> From<Result<C>> for ExecutionResult<C> {
    fn from(result: Result<C>) -> Self {
        match result {
            Ok(cursor) => ExecutionResult::Success(cursor),
            Err(err) => ExecutionResult::Failure(err.to_string()),
        }
    }
}

/// Generic success-or-message result, returned by scalar fetches
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    /// Operation produced a value
    Success(T),
    /// Operation failed
    Failure(String),
}

impl<T> QueryResult<T> {
    /// Returns `true` if the operation failed
    pub fn is_failure(&self) -> bool {
        matches!(self, QueryResult::Failure(_))
    }

    /// Returns `true` if the operation produced a value
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success(_))
    }

    /// Borrow the value
    pub fn value(&self) -> Option<&T> {
        match self {
            QueryResult::Success(value) => Some(value),
            QueryResult::Failure(_) => None,
        }
    }

    /// Convert into a `Result`, mapping failure to [`DatabaseError::FetchFailed`]
    pub fn into_result(self) -> Result<T> {
        match self {
            QueryResult::Success(value) => Ok(value),
            QueryResult::Failure(message) => Err(DatabaseError::fetch(message)),
        }
    }
}

impl<T> From<Result<T>> for QueryResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => QueryResult::Success(value),
            Err(err) => QueryResult::Failure(err.to_string()),
        }
    }
}
