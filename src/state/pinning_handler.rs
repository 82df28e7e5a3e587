//! Column pinning state and the pin transition.

use crate::model::{Column, ColumnId, PinSide};
use crate::state::TableState;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered left and right pin lists.
///
/// Invariant: an id appears at most once across both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnPinning {
    left: Vec<ColumnId>,
    right: Vec<ColumnId>,
}

impl ColumnPinning {
    /// Build from raw lists. Repeated ids keep their first position; an id
    /// listed on both sides stays on the left.
    pub fn new(left: Vec<ColumnId>, right: Vec<ColumnId>) -> Self {
        let mut seen = HashSet::new();
        let left = left.into_iter().filter(|id| seen.insert(id.clone())).collect();
        let right = right
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self { left, right }
    }

    /// Left-pinned ids, outermost first.
    pub fn left(&self) -> &[ColumnId] {
        &self.left
    }

    /// Right-pinned ids in pin order; the first is the innermost.
    pub fn right(&self) -> &[ColumnId] {
        &self.right
    }

    /// No column is pinned.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Edge the column is pinned to, if any.
    pub fn side_of(&self, id: &ColumnId) -> Option<PinSide> {
        if self.left.contains(id) {
            Some(PinSide::Left)
        } else if self.right.contains(id) {
            Some(PinSide::Right)
        } else {
            None
        }
    }

    /// Move `id` to the end of `side`'s list, or unpin it with `None`.
    ///
    /// Returns `false` when nothing changed (same-side re-pin, unpinning an
    /// unpinned column).
    pub fn pin(&mut self, id: &ColumnId, side: Option<PinSide>) -> bool {
        if self.side_of(id) == side {
            return false;
        }
        self.left.retain(|c| c != id);
        self.right.retain(|c| c != id);
        match side {
            Some(PinSide::Left) => self.left.push(id.clone()),
            Some(PinSide::Right) => self.right.push(id.clone()),
            None => {}
        }
        true
    }

    /// Drop ids that are unknown or not pinnable.
    pub fn normalized<T, O>(&self, columns: &[Column<T, O>]) -> Self {
        let keep = |id: &&ColumnId| {
            let ok = columns.iter().any(|c| c.id() == *id && c.is_pinnable());
            if !ok {
                debug!(column = %id, "Dropping pin for unknown or unpinnable column");
            }
            ok
        };
        Self::new(
            self.left.iter().filter(keep).cloned().collect(),
            self.right.iter().filter(keep).cloned().collect(),
        )
    }
}

/// Pin, re-pin or unpin a column.
///
/// Unknown and non-pinnable columns are ignored. Widths are untouched.
pub fn handle_pin<T, O>(
    mut state: TableState<T, O>,
    column: &ColumnId,
    side: Option<PinSide>,
) -> TableState<T, O> {
    let pinnable = state.column(column).is_some_and(|c| c.is_pinnable());
    if !pinnable {
        debug!(column = %column, "Ignoring pin for unknown or unpinnable column");
        return state;
    }

    if state.pinning.pin(column, side) {
        info!(column = %column, side = ?side, "Column pinning changed");
    }
    state
}

#[cfg(test)]
#[path = "pinning_handler_tests.rs"]
mod tests;
