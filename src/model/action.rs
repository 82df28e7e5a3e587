//! Table commands: every state transition the engine accepts.

use crate::model::column::ColumnId;
use crate::model::row::RowId;
use serde::{Deserialize, Serialize};

/// Edge a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    /// Leading edge.
    Left,
    /// Trailing edge.
    Right,
}

/// A command applied to a table through [`crate::state::dispatch`].
///
/// Hosts map their input devices (keys, clicks, pointer drags) to these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Cycle the sort of a column: unsorted → asc → desc → unsorted.
    ToggleSort(ColumnId),
    /// Clear the active sort.
    ResetSorting,

    /// Request a specific 1-based page.
    GoToPage(usize),
    /// Step back one page; ignored on the first.
    PreviousPage,
    /// Step forward one page; ignored on the last.
    NextPage,
    /// Choose one of the configured page sizes.
    SetPageSize(usize),

    /// Flip one row's checkbox.
    ToggleRow(RowId),
    /// Flip the header checkbox.
    ToggleAllRows,
    /// Clear the selection without emitting events.
    ResetSelected,

    /// Show or hide a row's sub-component.
    ToggleExpanded(RowId),

    /// Pin a column to a side, or unpin it with `None`.
    Pin {
        /// Column to move.
        column: ColumnId,
        /// Target edge; `None` unpins.
        side: Option<PinSide>,
    },

    /// Set a column's width directly.
    ResizeColumn {
        /// Column to resize.
        column: ColumnId,
        /// Requested width, clamped to the column's minimum.
        width: u32,
    },
    /// Begin a resize drag at a pointer position.
    StartResize {
        /// Column whose handle was grabbed.
        column: ColumnId,
        /// Pointer x at the start of the drag.
        pointer_x: i32,
    },
    /// Continue the active resize drag.
    DragResize {
        /// Current pointer x.
        pointer_x: i32,
    },
    /// Finish the active resize drag.
    EndResize,
}
