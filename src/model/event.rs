//! Sort state and the intent events a table emits to its owner.

use crate::model::column::ColumnId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the single active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The active sort: one column, one direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortState {
    /// Sorted column.
    pub column: ColumnId,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Sort `column` in `direction`.
    pub fn new(column: ColumnId, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Order reported in a [`TableEvent::Sort`]; `Cleared` serializes as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortOrder {
    /// Ascending.
    #[serde(rename = "asc")]
    Asc,
    /// Descending.
    #[serde(rename = "desc")]
    Desc,
    /// The sort was removed.
    #[serde(rename = "")]
    Cleared,
}

impl SortOrder {
    /// Wire form; empty for `Cleared`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
            SortOrder::Cleared => "",
        }
    }
}

impl From<Option<SortDirection>> for SortOrder {
    fn from(direction: Option<SortDirection>) -> Self {
        match direction {
            Some(SortDirection::Asc) => SortOrder::Asc,
            Some(SortDirection::Desc) => SortOrder::Desc,
            None => SortOrder::Cleared,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User intent queued by the engine and drained by the owning screen.
///
/// The engine never fetches: the owner reacts to these by refetching or by
/// syncing its own selection store.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// Sort changed; `order` is `Cleared` when the sort was removed.
    Sort {
        /// New order.
        order: SortOrder,
        /// Column the order applies to.
        key: ColumnId,
    },
    /// A different page was requested (1-based).
    PaginationChange(usize),
    /// A different page size was chosen.
    PageSizeChange(usize),
    /// A row's checkbox changed.
    CheckBoxChange {
        /// New checked state.
        checked: bool,
        /// The toggled row.
        row: T,
    },
    /// The header checkbox changed, affecting every listed row.
    IndeterminateCheckBoxChange {
        /// New checked state of every listed row.
        checked: bool,
        /// Selectable rows of the page.
        rows: Vec<T>,
    },
}

impl<T> TableEvent<T> {
    /// Whether the owner has to refetch in response.
    pub fn requires_refetch(&self) -> bool {
        matches!(
            self,
            TableEvent::Sort { .. }
                | TableEvent::PaginationChange(_)
                | TableEvent::PageSizeChange(_)
        )
    }
}
