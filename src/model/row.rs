//! Row abstraction and table-assigned row identity.

use crate::model::column::{CellValue, ColumnId};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// A record the table can project into cells.
///
/// Rows are owned by the caller; the engine only reads them and clones them
/// into outgoing events.
pub trait TableRow: Clone {
    /// Stable key identifying the row across refetches, if the caller has one.
    fn key(&self) -> Option<String> {
        None
    }

    /// Raw value of the given column for this row.
    fn cell_value(&self, column: &ColumnId) -> CellValue;
}

impl TableRow for serde_json::Value {
    fn cell_value(&self, column: &ColumnId) -> CellValue {
        self.get(column.as_str()).cloned().unwrap_or(CellValue::Null)
    }
}

/// Table-assigned identity of a row on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RowId {
    /// Caller-supplied stable key.
    Key(String),
    /// Position within the supplied rows.
    Index(usize),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Key(key) => f.write_str(key),
            RowId::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Assign a [`RowId`] to every row.
///
/// Uses the row's key when present and not already taken, otherwise the row's
/// index. Duplicate keys fall back to the index so ids stay unique.
pub fn assign_row_ids<T: TableRow>(rows: &[T]) -> Vec<RowId> {
    let mut seen = HashSet::new();
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.key() {
            Some(key) if seen.insert(key.clone()) => RowId::Key(key),
            Some(key) => {
                warn!(key = %key, index, "Duplicate row key, using index identity");
                RowId::Index(index)
            }
            None => RowId::Index(index),
        })
        .collect()
}
