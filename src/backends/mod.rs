//! Driver implementations
//!
//! This module contains concrete implementations of the [`Connection`](crate::core::Connection)
//! trait.

pub mod buffered;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use buffered::BufferedCursor;
pub use memory::{MemoryConnection, ResultSet};
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteConnection, SqliteCursor};
