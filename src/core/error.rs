//! Error types for the connector
//!
//! The result enums of the fetch protocol carry plain messages. This module
//! holds the structured error used by everything around them: driver setup,
//! configuration, row access and conversions into `std::result::Result`.

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Error types for connector operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection could not be opened or used
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Statement could not begin executing
    #[error("Query execution error: {0}")]
    QueryError(String),

    /// A row could not be fetched after execution began
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Positional access outside `[0, count)`
    #[error("Column index {index} out of range for row with {count} columns")]
    ColumnIndexOutOfRange { index: usize, count: usize },

    /// No column with the requested name
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Row width does not match the cursor's column count
    #[error("Column count mismatch: expected {expected}, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Operation on a cursor that was already closed
    #[error("Cursor is closed")]
    CursorClosed,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// SQLite error
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl DatabaseError {
    /// Create a new connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        DatabaseError::ConnectionError(msg.into())
    }

    /// Create a new query error
    pub fn query<S: Into<String>>(msg: S) -> Self {
        DatabaseError::QueryError(msg.into())
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        DatabaseError::FetchFailed(msg.into())
    }

    /// Create an out-of-range column index error
    pub fn column_index(index: usize, count: usize) -> Self {
        DatabaseError::ColumnIndexOutOfRange { index, count }
    }

    /// Create a column count mismatch error
    pub fn column_count_mismatch(expected: usize, actual: usize) -> Self {
        DatabaseError::ColumnCountMismatch { expected, actual }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DatabaseError::InvalidConfig(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DatabaseError::Other(msg.into())
    }
}
