//! Row expand/collapse handler.
//!
//! Pure functions that transform TableState in response to expand actions.
//! Expansion has no owner-facing event; it only controls whether the
//! row's sub-component is rendered.

use crate::model::RowId;
use crate::state::TableState;
use tracing::debug;

/// Show or hide a row's sub-component.
///
/// Ignored for rows not on the page and rows that are not expandable (no
/// sub-component configured, or rejected by `row_expandable`).
pub fn handle_toggle_expanded<T, O>(mut state: TableState<T, O>, id: &RowId) -> TableState<T, O> {
    let expandable = state
        .page_row(id)
        .is_some_and(|row| state.is_row_expandable(row));
    if !expandable {
        debug!(row = %id, "Ignoring expand for missing or non-expandable row");
        return state;
    }

    if !state.expanded.remove(id) {
        state.expanded.insert(id.clone());
    }
    debug!(row = %id, expanded = state.expanded.contains(id), "Row expansion toggled");
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "expand_handler_tests.rs"]
mod tests;
