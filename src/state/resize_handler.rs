//! Column width tracking and resize transitions.
//!
//! Widths are kept apart from the immutable [`Column`] definitions. Every
//! write is clamped to the column's `min_size`; resizing never touches
//! pinning.

use crate::model::{Column, ColumnId};
use crate::state::TableState;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Tracked width per column id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSizing {
    widths: HashMap<ColumnId, u32>,
}

impl ColumnSizing {
    /// Seed widths from the columns' declared sizes.
    pub fn from_columns<T, O>(columns: &[Column<T, O>]) -> Self {
        Self {
            widths: columns
                .iter()
                .map(|c| (c.id().clone(), c.size()))
                .collect(),
        }
    }

    /// Current width of a column, never below its `min_size`.
    pub fn width_of<T, O>(&self, column: &Column<T, O>) -> u32 {
        self.widths
            .get(column.id())
            .copied()
            .unwrap_or_else(|| column.size())
            .max(column.min_size())
    }

    fn set(&mut self, id: &ColumnId, width: u32) {
        self.widths.insert(id.clone(), width);
    }
}

/// An in-progress pointer drag on a column's resize handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag {
    /// Column being resized.
    pub column: ColumnId,
    /// Pointer x when the drag started.
    pub origin_x: i32,
    /// Column width when the drag started.
    pub origin_width: u32,
}

/// Set a column's width directly, clamped to `min_size`.
///
/// Ignored when resizing is disabled or the column is unknown.
pub fn handle_resize_column<T, O>(
    mut state: TableState<T, O>,
    column: &ColumnId,
    width: u32,
) -> TableState<T, O> {
    if !state.options.resizable {
        return state;
    }
    let Some(def) = state.columns.iter().find(|c| c.id() == column) else {
        debug!(column = %column, "Ignoring resize for unknown column");
        return state;
    };

    let clamped = width.max(def.min_size());
    if state.sizing.width_of(def) != clamped {
        trace!(column = %column, width = clamped, "Column resized");
        state.sizing.set(column, clamped);
    }
    state
}

/// Begin a drag at `pointer_x`, remembering the current width.
pub fn handle_start_resize<T, O>(
    mut state: TableState<T, O>,
    column: &ColumnId,
    pointer_x: i32,
) -> TableState<T, O> {
    if !state.options.resizable {
        return state;
    }
    let Some(origin_width) = state.column_width(column) else {
        return state;
    };
    debug!(column = %column, origin_width, "Resize drag started");
    state.resize_drag = Some(ResizeDrag {
        column: column.clone(),
        origin_x: pointer_x,
        origin_width,
    });
    state
}

/// Move the active drag to `pointer_x`; a no-op without one.
pub fn handle_drag_resize<T, O>(state: TableState<T, O>, pointer_x: i32) -> TableState<T, O> {
    let Some(drag) = state.resize_drag.clone() else {
        return state;
    };
    let delta = i64::from(pointer_x) - i64::from(drag.origin_x);
    let width = (i64::from(drag.origin_width) + delta).clamp(0, i64::from(u32::MAX));
    // clamp above guarantees the conversion
    let width = u32::try_from(width).unwrap_or(u32::MAX);
    handle_resize_column(state, &drag.column, width)
}

/// Finish the active drag, keeping the width it produced.
pub fn handle_end_resize<T, O>(mut state: TableState<T, O>) -> TableState<T, O> {
    if let Some(drag) = state.resize_drag.take() {
        debug!(column = %drag.column, "Resize drag ended");
    }
    state
}

#[cfg(test)]
#[path = "resize_handler_tests.rs"]
mod tests;
