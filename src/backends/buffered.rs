//! Buffered cursor shared by the bundled drivers
//!
//! The driver reads the statement's rows up front; the cursor then replays
//! them through the fetch state machine. A read error is kept and reported
//! in place of the rows that would have followed it.

use crate::core::{
    cursor::{Cursor, CursorState},
    data_type::DataType,
    result::FetchResult,
    row::ValueRow,
};
use std::collections::VecDeque;
use std::sync::Arc;

/// Cursor over rows already read from the driver
#[derive(Debug)]
pub struct BufferedCursor {
    columns: Arc<[String]>,
    column_types: Vec<DataType>,
    pending: VecDeque<ValueRow>,
    failure: Option<String>,
    state: CursorState,
}

impl BufferedCursor {
    /// Create a cursor that yields `rows`, then `failure` if set, then `Empty`
    pub fn new(
        columns: Arc<[String]>,
        column_types: Vec<DataType>,
        rows: Vec<ValueRow>,
        failure: Option<String>,
    ) -> Self {
        Self {
            columns,
            column_types,
            pending: rows.into(),
            failure,
            state: CursorState::Ready,
        }
    }

    /// Declared type of each column
    pub fn column_types(&self) -> &[DataType] {
        &self.column_types
    }

    /// Current fetch position
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Rows not yet fetched
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Cursor for BufferedCursor {
    type Row = ValueRow;

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn fetch_row(&mut self) -> FetchResult<ValueRow> {
        if let Some(signal) = self.state.terminal_signal() {
            return signal;
        }

        if let Some(row) = self.pending.pop_front() {
            return FetchResult::Data(row);
        }

        match self.failure.take() {
            Some(message) => {
                tracing::debug!(error = %message, "cursor failed");
                self.state = CursorState::Failed(message.clone());
                FetchResult::Failure(message)
            }
            None => {
                tracing::trace!("cursor exhausted");
                self.state = CursorState::Exhausted;
                FetchResult::Empty
            }
        }
    }

    fn close(&mut self) {
        if self.state == CursorState::Closed {
            return;
        }
        tracing::trace!(discarded = self.pending.len(), "closing cursor");
        self.pending.clear();
        self.failure = None;
        self.state = CursorState::Closed;
    }
}
