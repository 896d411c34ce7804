//! # SQL Connector
//!
//! A small, synchronous boundary between application code and SQL database
//! drivers: a typed value model, an execution result, and a row cursor with a
//! well-defined end-of-data and failure protocol.
//!
//! ## Features
//!
//! - **Closed value model**: [`Value`] and [`DataType`] cover bool, int,
//!   double, text, null and error, with lossy conversion accessors that never
//!   panic
//! - **Three failure channels**: statement failures ([`ExecutionResult`]),
//!   fetch failures ([`FetchResult`]) and cell failures ([`Value::Error`])
//!   are reported separately
//! - **Driver traits**: [`Connection`] and [`Cursor`] with associated types
//! - **Bundled drivers**: SQLite (feature `sqlite`) and a scripted in-memory
//!   driver for tests
//!
//! ## Value conversions
//!
//! | From \ To | string | bool | int | double |
//! |-----------|--------|------|-----|--------|
//! | bool | `true`/`false` | identity | 1 / 0 | 1.0 / 0.0 |
//! | int | decimal | `n != 0` | identity | widened |
//! | double | textual | `x != 0` | truncated | identity |
//! | text | identity | never | parsed | parsed |
//! | null, error | none | none | none | none |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sql_connector::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conn = SqliteConnection::open_in_memory()?;
//!     conn.execute_batch(
//!         "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);
//!          INSERT INTO users (name) VALUES ('Alice');",
//!     )?;
//!
//!     let mut cursor = conn.execute("SELECT id, name FROM users").into_result()?;
//!     for result in cursor.rows() {
//!         match result {
//!             FetchResult::Data(row) => {
//!                 if let Some(name) = row.get_by_name("name").and_then(Value::string_value) {
//!                     println!("User: {}", name);
//!                 }
//!             }
//!             FetchResult::Empty => break,
//!             FetchResult::Failure(message) => return Err(DatabaseError::fetch(message)),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Project Structure
//!
//! ```text
//! sql_connector/
//! ├── src/
//! │   ├── core/              # Value model, results and driver traits
//! │   │   ├── config.rs      # Connection configuration
//! │   │   ├── connection.rs  # Connection trait
//! │   │   ├── cursor.rs      # Cursor trait and fetch state machine
//! │   │   ├── data_type.rs   # Data type tags
//! │   │   ├── error.rs       # Error types
//! │   │   ├── result.rs      # Execution, fetch and scalar results
//! │   │   ├── row.rs         # Row trait and owned rows
//! │   │   ├── value.rs       # Values and conversions
//! │   │   └── mod.rs
//! │   ├── backends/          # Driver implementations
//! │   │   ├── buffered.rs    # Cursor shared by the bundled drivers
//! │   │   ├── memory.rs      # Scripted in-memory driver
//! │   │   ├── sqlite.rs      # SQLite driver
//! │   │   └── mod.rs
//! │   └── lib.rs
//! ├── demos/                 # Example programs
//! ├── tests/                 # Integration and property tests
//! ├── benches/               # Criterion benchmarks
//! └── Cargo.toml
//! ```

/// Core connector types and traits
pub mod core;

/// Driver implementations
pub mod backends;

/// Prelude for convenient imports
///
/// ```rust
/// use sql_connector::prelude::*;
///
/// let value = Value::from(42);
/// assert_eq!(value.string_value().as_deref(), Some("42"));
/// ```
pub mod prelude {
    pub use crate::core::{
        Connection, ConnectionConfig, Cursor, DataType, DatabaseError, ExecutionResult,
        FetchResult, QueryResult, Result, Row, Value, ValueRow,
    };

    pub use crate::backends::MemoryConnection;
    #[cfg(feature = "sqlite")]
    pub use crate::backends::SqliteConnection;
}

// Re-export at root level for convenience
pub use crate::core::{
    Connection, ConnectionConfig, Cursor, CursorState, DataType, DatabaseError, ExecutionResult,
    FetchResult, QueryResult, Result, Row, ValueRow, Value,
};

#[cfg(feature = "sqlite")]
pub use backends::SqliteConnection;
