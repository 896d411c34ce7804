//! Row access
//!
//! [`Row`] is the capability every driver's row representation provides.
//! [`ValueRow`] is the owned row the bundled drivers hand out.

use super::error::{DatabaseError, Result};
use super::value::Value;
use std::ops::Index;
use std::sync::Arc;

/// An ordered tuple of values with named columns
pub trait Row {
    /// All values in column order
    fn values(&self) -> &[Value];

    /// Column names in order, same length as [`values`](Row::values)
    fn column_names(&self) -> &[String];

    /// Number of values in the row
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Check if the row has no columns
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Value at `index`, or `None` outside `[0, len)`
    fn get(&self, index: usize) -> Option<&Value> {
        self.values().get(index)
    }

    /// Value at `index`, or `ColumnIndexOutOfRange`
    fn value_at(&self, index: usize) -> Result<&Value> {
        self.get(index)
            .ok_or_else(|| DatabaseError::column_index(index, self.len()))
    }

    /// Value of the first column named `name`.
    ///
    /// Duplicate names are allowed; only the first one is reachable here.
    fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.column_names()
            .iter()
            .position(|column| column == name)
            .and_then(|index| self.values().get(index))
    }

    /// Value of the first column named `name`, or `ColumnNotFound`
    fn value_named(&self, name: &str) -> Result<&Value> {
        self.get_by_name(name)
            .ok_or_else(|| DatabaseError::ColumnNotFound(name.to_string()))
    }
}

/// Element-wise comparison of two rows' values
pub fn rows_equal<A, B>(left: &A, right: &B) -> bool
where
    A: Row + ?Sized,
    B: Row + ?Sized,
{
    left.values() == right.values()
}

/// Owned row with column names shared across a result set
#[derive(Debug, Clone)]
pub struct ValueRow {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl ValueRow {
    /// Create a row, checking that there is one value per column
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(DatabaseError::column_count_mismatch(
                columns.len(),
                values.len(),
            ));
        }
        Ok(Self { columns, values })
    }

    /// Shared column names
    pub fn columns(&self) -> &Arc<[String]> {
        &self.columns
    }

    /// Take the values out of the row
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Row for ValueRow {
    fn values(&self) -> &[Value] {
        &self.values
    }

    fn column_names(&self) -> &[String] {
        &self.columns
    }
}

/// Rows compare by values only; column names do not take part.
impl PartialEq for ValueRow {
    fn eq(&self, other: &Self) -> bool {
        rows_equal(self, other)
    }
}

/// Panics when `index` is out of range; use [`Row::value_at`] to get an error.
impl Index<usize> for ValueRow {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_positional_access() -> Result<()> {
        let row = ValueRow::new(columns(&["id", "name"]), vec![Value::Int(1), "a".into()])?;
        assert_eq!(row.len(), 2);
        assert_eq!(row[0], Value::Int(1));
        assert_eq!(row.get(1), Some(&Value::Text("a".into())));
        assert_eq!(row.get(2), None);
        assert!(matches!(
            row.value_at(5),
            Err(DatabaseError::ColumnIndexOutOfRange { index: 5, count: 2 })
        ));
        Ok(())
    }

    #[test]
    fn test_name_access_first_match_wins() -> Result<()> {
        let row = ValueRow::new(
            columns(&["a", "b", "a"]),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
        )?;
        assert_eq!(row.get_by_name("a"), Some(&Value::Int(1)));
        assert_eq!(row.get_by_name("b"), Some(&Value::Int(2)));
        assert_eq!(row.get_by_name("c"), None);
        assert_eq!(row.value_named("a")?, &Value::Int(1));
        assert!(matches!(
            row.value_named("c"),
            Err(DatabaseError::ColumnNotFound(name)) if name == "c"
        ));
        Ok(())
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let result = ValueRow::new(columns(&["a"]), vec![Value::Null, Value::Null]);
        assert!(matches!(
            result,
            Err(DatabaseError::ColumnCountMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_equality_ignores_column_names() -> Result<()> {
        let left = ValueRow::new(columns(&["x"]), vec![Value::Int(1)])?;
        let right = ValueRow::new(columns(&["y"]), vec![Value::Int(1)])?;
        let longer = ValueRow::new(columns(&["x", "y"]), vec![Value::Int(1), Value::Null])?;
        assert_eq!(left, right);
        assert_ne!(left, longer);
        Ok(())
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let row = ValueRow::new(columns(&[]), vec![]).unwrap();
        let _ = &row[0];
    }
}
