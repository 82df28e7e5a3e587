//! Single-column sort transitions.
//!
//! Pure functions that transform TableState in response to sort commands.
//! Sorting itself happens at the data source; the engine only tracks the
//! active column/direction and emits `Sort` intents.

use crate::model::{ColumnId, SortDirection, SortOrder, SortState, TableEvent};
use crate::state::TableState;
use tracing::{debug, info};

/// Sort that follows `current` when `column` is toggled.
///
/// The same column cycles asc → desc → unsorted; any other column starts at
/// asc and replaces the previous sort.
pub fn next_sort(current: Option<&SortState>, column: &ColumnId) -> Option<SortState> {
    match current {
        Some(sort) if &sort.column == column => match sort.direction {
            SortDirection::Asc => Some(SortState::new(column.clone(), SortDirection::Desc)),
            SortDirection::Desc => None,
        },
        _ => Some(SortState::new(column.clone(), SortDirection::Asc)),
    }
}

/// Toggle the sort of `column` and emit the resulting `Sort` event.
///
/// Unknown and non-sortable columns are ignored.
pub fn handle_toggle_sort<T, O>(mut state: TableState<T, O>, column: &ColumnId) -> TableState<T, O> {
    let sortable = state.column(column).is_some_and(|c| c.is_sortable());
    if !sortable {
        debug!(column = %column, "Ignoring sort toggle for unknown or unsortable column");
        return state;
    }

    let next = next_sort(state.sort.as_ref(), column);
    let order = SortOrder::from(next.as_ref().map(|s| s.direction));
    state.sort = next;

    info!(column = %column, order = %order, "Sort changed");
    state.push_event(TableEvent::Sort {
        order,
        key: column.clone(),
    });
    state
}

/// Clear the active sort.
///
/// Emits a cleared `Sort` event for the previously sorted column so the
/// owner refetches in natural order; does nothing when already unsorted.
pub fn handle_reset_sorting<T, O>(mut state: TableState<T, O>) -> TableState<T, O> {
    if let Some(previous) = state.sort.take() {
        info!(column = %previous.column, "Sort reset");
        state.push_event(TableEvent::Sort {
            order: SortOrder::Cleared,
            key: previous.column,
        });
    }
    state
}

#[cfg(test)]
#[path = "sort_handler_tests.rs"]
mod tests;
