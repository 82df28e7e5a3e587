//! Sticky offsets and render order for pinned columns.
//!
//! Left-pinned columns stick at the sum of the widths pinned before them;
//! right-pinned columns stick at the sum of the widths pinned after them,
//! measured from the right edge.

use crate::model::{ColumnId, PinSide};
use crate::state::TableState;
use serde::Serialize;

/// Exclusive prefix sums: `offsets[i] = widths[0] + .. + widths[i-1]`.
pub fn left_offsets(widths: &[u32]) -> Vec<u32> {
    widths
        .iter()
        .scan(0u32, |acc, &w| {
            let offset = *acc;
            *acc = acc.saturating_add(w);
            Some(offset)
        })
        .collect()
}

/// Exclusive suffix sums: `offsets[i] = widths[i+1] + .. + widths[n-1]`.
pub fn right_offsets(widths: &[u32]) -> Vec<u32> {
    let mut offsets: Vec<u32> = widths
        .iter()
        .rev()
        .scan(0u32, |acc, &w| {
            let offset = *acc;
            *acc = acc.saturating_add(w);
            Some(offset)
        })
        .collect();
    offsets.reverse();
    offsets
}

/// Where one column is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPlacement {
    /// Column drawn here.
    pub column: ColumnId,
    /// Position in the definition order.
    pub index: usize,
    /// Tracked width.
    pub width: u32,
    /// Edge the column is pinned to.
    pub pin: Option<PinSide>,
    /// Sticky offset from the pinned edge; `None` for unpinned columns.
    pub offset: Option<u32>,
    /// Last left-pinned or first right-pinned column.
    pub boundary_shadow: bool,
}

/// Columns in render order: left pins, unpinned, right pins.
pub fn layout_columns<T, O>(state: &TableState<T, O>) -> Vec<ColumnPlacement> {
    let index_of = |id: &ColumnId| state.columns().iter().position(|c| c.id() == id);
    let width_of = |id: &ColumnId| state.column_width(id).unwrap_or_default();

    let pinned = |ids: &[ColumnId]| -> Vec<(usize, ColumnId, u32)> {
        ids.iter()
            .filter_map(|id| index_of(id).map(|index| (index, id.clone(), width_of(id))))
            .collect()
    };
    let left = pinned(state.pinning().left());
    let right = pinned(state.pinning().right());

    let left_widths: Vec<u32> = left.iter().map(|(_, _, w)| *w).collect();
    let right_widths: Vec<u32> = right.iter().map(|(_, _, w)| *w).collect();
    let left_off = left_offsets(&left_widths);
    let right_off = right_offsets(&right_widths);

    let mut placements = Vec::with_capacity(state.columns().len());

    let last_left = left.len().saturating_sub(1);
    for (i, (index, column, width)) in left.into_iter().enumerate() {
        placements.push(ColumnPlacement {
            column,
            index,
            width,
            pin: Some(PinSide::Left),
            offset: Some(left_off[i]),
            boundary_shadow: i == last_left,
        });
    }

    for (index, column) in state.columns().iter().enumerate() {
        if state.pinning().side_of(column.id()).is_none() {
            placements.push(ColumnPlacement {
                column: column.id().clone(),
                index,
                width: state.sizing().width_of(column),
                pin: None,
                offset: None,
                boundary_shadow: false,
            });
        }
    }

    for (i, (index, column, width)) in right.into_iter().enumerate() {
        placements.push(ColumnPlacement {
            column,
            index,
            width,
            pin: Some(PinSide::Right),
            offset: Some(right_off[i]),
            boundary_shadow: i == 0,
        });
    }

    placements
}
