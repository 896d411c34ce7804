//! Cursor trait and fetch state machine
//!
//! A cursor is created by one `execute` call and hands out rows one at a time.
//! Once it reports `Empty` or `Failure` it keeps reporting the same signal.

use super::error::{DatabaseError, Result};
use super::result::{FetchResult, QueryResult};
use super::row::Row;
use super::value::Value;
use std::iter::FusedIterator;

/// Message reported by every fetch on a closed cursor
pub const CURSOR_CLOSED_MESSAGE: &str = "cursor is closed";

/// Fetch position of a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// More rows may be available
    Ready,
    /// All rows were read
    Exhausted,
    /// A fetch failed with the given message
    Failed(String),
    /// The cursor was closed and released its resources
    Closed,
}

impl CursorState {
    /// Returns `true` once the cursor can no longer produce rows
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CursorState::Ready)
    }

    /// The signal every fetch in this state returns, `None` while `Ready`
    pub fn terminal_signal<R>(&self) -> Option<FetchResult<R>> {
        match self {
            CursorState::Ready => None,
            CursorState::Exhausted => Some(FetchResult::Empty),
            CursorState::Failed(message) => Some(FetchResult::Failure(message.clone())),
            CursorState::Closed => Some(FetchResult::Failure(CURSOR_CLOSED_MESSAGE.to_string())),
        }
    }
}

/// Row-by-row access to the results of one statement
///
/// Drivers implement [`fetch_row`](Cursor::fetch_row) and
/// [`close`](Cursor::close); scalar fetching and iteration come for free.
pub trait Cursor {
    /// Row type handed out by this cursor
    type Row: Row;

    /// Number of columns in every row, fixed at creation
    fn column_count(&self) -> usize;

    /// Column names, fixed at creation
    fn column_names(&self) -> &[String];

    /// Fetch the next row.
    ///
    /// After `Empty` or `Failure` every further call returns the same signal.
    fn fetch_row(&mut self) -> FetchResult<Self::Row>;

    /// Release the underlying resources. Later fetches report
    /// [`CURSOR_CLOSED_MESSAGE`]. Closing twice is a no-op.
    fn close(&mut self);

    /// Fetch the next row, return its first value and close the cursor.
    ///
    /// The cursor is closed whether or not a value was read.
    fn fetch_scalar(&mut self) -> QueryResult<Value> {
        let result = match self.fetch_row() {
            FetchResult::Data(row) => match row.values().first() {
                Some(value) => QueryResult::Success(value.clone()),
                None => QueryResult::Failure("row has no columns".to_string()),
            },
            FetchResult::Empty => QueryResult::Failure("no rows".to_string()),
            FetchResult::Failure(message) => QueryResult::Failure(message),
        };
        self.close();
        result
    }

    /// Iterate over fetch results, ending with the terminal `Empty` or `Failure`
    fn rows(&mut self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows::new(self)
    }

    /// Read every remaining row.
    ///
    /// A terminal `Failure` becomes [`DatabaseError::FetchFailed`], or
    /// [`DatabaseError::CursorClosed`] when the cursor was closed; rows read
    /// before it are dropped.
    fn fetch_all(&mut self) -> Result<Vec<Self::Row>>
    where
        Self: Sized,
    {
        let mut rows = Vec::new();
        for result in self.rows() {
            match result {
                FetchResult::Data(row) => rows.push(row),
                FetchResult::Empty => break,
                FetchResult::Failure(message) if message == CURSOR_CLOSED_MESSAGE => {
                    return Err(DatabaseError::CursorClosed)
                }
                FetchResult::Failure(message) => return Err(DatabaseError::fetch(message)),
            }
        }
        Ok(rows)
    }
}

/// Lazy iterator over a cursor's fetch results.
///
/// Yields each `Data` row, then the terminal `Empty` or `Failure`, then
/// nothing. It cannot be restarted.
pub struct Rows<'c, C: Cursor> {
    cursor: &'c mut C,
    finished: bool,
}

impl<'c, C: Cursor> Rows<'c, C> {
    /// Start iterating `cursor` from its current position
    pub fn new(cursor: &'c mut C) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }
}

impl<C: Cursor> Iterator for Rows<'_, C> {
    type Item = FetchResult<C::Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.cursor.fetch_row();
        self.finished = result.is_terminal();
        Some(result)
    }
}

impl<C: Cursor> FusedIterator for Rows<'_, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row::ValueRow;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Cursor driven by a fixed list of fetch outcomes
    struct ScriptCursor {
        columns: Vec<String>,
        script: VecDeque<std::result::Result<ValueRow, String>>,
        state: CursorState,
    }

    impl ScriptCursor {
        fn new(script: Vec<std::result::Result<Vec<Value>, String>>) -> Self {
            let columns: Arc<[String]> = vec!["n".to_string(), "s".to_string()].into();
            let script = script
                .into_iter()
                .map(|step| step.map(|values| ValueRow::new(columns.clone(), values).unwrap()))
                .collect();
            Self {
                columns: columns.to_vec(),
                script,
                state: CursorState::Ready,
            }
        }
    }

    impl Cursor for ScriptCursor {
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
            match self.script.pop_front() {
                Some(Ok(row)) => FetchResult::Data(row),
                Some(Err(message)) => {
                    self.state = CursorState::Failed(message.clone());
                    FetchResult::Failure(message)
                }
                None => {
                    self.state = CursorState::Exhausted;
                    FetchResult::Empty
                }
            }
        }

        fn close(&mut self) {
            self.script.clear();
            self.state = CursorState::Closed;
        }
    }

    fn r1() -> Vec<Value> {
        vec![Value::Int(1), "a".into()]
    }

    fn r2() -> Vec<Value> {
        vec![Value::Int(2), "b".into()]
    }

    #[test]
    fn test_iteration_ends_with_empty() {
        let mut cursor = ScriptCursor::new(vec![Ok(r1()), Ok(r2())]);
        let results: Vec<_> = cursor.rows().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].row().map(|r| r.values().to_vec()), Some(r1()));
        assert_eq!(results[1].row().map(|r| r.values().to_vec()), Some(r2()));
        assert!(results[2].is_empty());
    }

    #[test]
    fn test_iteration_ends_with_failure() {
        let mut cursor = ScriptCursor::new(vec![Ok(r1()), Err("disk I/O error".into())]);
        let mut rows = cursor.rows();
        assert!(rows.next().is_some_and(|r| r.row().is_some()));
        assert_eq!(
            rows.next().and_then(|r| r.failure_message().map(String::from)),
            Some("disk I/O error".to_string())
        );
        assert!(rows.next().is_none());
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_terminal_signal_is_repeated() {
        let mut cursor = ScriptCursor::new(vec![]);
        assert!(cursor.fetch_row().is_empty());
        assert!(cursor.fetch_row().is_empty());

        let mut cursor = ScriptCursor::new(vec![Err("boom".into()), Ok(r1())]);
        assert_eq!(cursor.fetch_row().failure_message(), Some("boom"));
        assert_eq!(cursor.fetch_row().failure_message(), Some("boom"));
    }

    #[test]
    fn test_fetch_scalar_closes() {
        let mut cursor = ScriptCursor::new(vec![Ok(vec![Value::Int(5), "x".into()])]);
        assert_eq!(cursor.fetch_scalar(), QueryResult::Success(Value::Int(5)));
        assert_eq!(cursor.state, CursorState::Closed);
        assert_eq!(
            cursor.fetch_row().failure_message(),
            Some(CURSOR_CLOSED_MESSAGE)
        );
    }

    #[test]
    fn test_fetch_scalar_without_rows() {
        let mut cursor = ScriptCursor::new(vec![]);
        assert!(cursor.fetch_scalar().is_failure());
        assert_eq!(cursor.state, CursorState::Closed);

        let mut cursor = ScriptCursor::new(vec![Err("locked".into())]);
        assert_eq!(cursor.fetch_scalar(), QueryResult::Failure("locked".into()));
        assert_eq!(cursor.state, CursorState::Closed);
    }

    #[test]
    fn test_fetch_all() {
        let mut cursor = ScriptCursor::new(vec![Ok(r1()), Ok(r2())]);
        let rows = cursor.fetch_all().unwrap();
        assert_eq!(rows.len(), 2);

        let mut cursor = ScriptCursor::new(vec![Ok(r1()), Err("gone".into())]);
        assert!(matches!(
            cursor.fetch_all(),
            Err(DatabaseError::FetchFailed(msg)) if msg == "gone"
        ));
    }

    #[test]
    fn test_fetch_all_on_closed_cursor() {
        let mut cursor = ScriptCursor::new(vec![Ok(r1())]);
        cursor.close();
        assert!(matches!(cursor.fetch_all(), Err(DatabaseError::CursorClosed)));
    }

    #[test]
    fn test_state_terminal_signal() {
        assert!(CursorState::Ready.terminal_signal::<ValueRow>().is_none());
        assert!(CursorState::Exhausted.is_terminal());
        assert_eq!(
            CursorState::Failed("x".into()).terminal_signal::<ValueRow>(),
            Some(FetchResult::Failure("x".into()))
        );
    }
}
