//! Row selection transitions.
//!
//! Selection is scoped to the rendered page. Toggles flip the *displayed*
//! checked state, so when the caller overrides `checkbox_checked` the new
//! value is the negation of what the caller showed.

use crate::model::{RowId, TableEvent};
use crate::state::TableState;
use tracing::{debug, info};

/// Flip one row's checkbox and emit `CheckBoxChange`.
///
/// Ignored for rows not on the page, rows rejected by `row_selectable`, and
/// while the table is loading or empty.
pub fn handle_toggle_row<T: Clone, O>(mut state: TableState<T, O>, id: &RowId) -> TableState<T, O> {
    let Some(row) = state.page_row(id).cloned() else {
        debug!(row = %id, "Ignoring toggle for row not on page");
        return state;
    };
    if !state.is_row_selectable(&row) {
        debug!(row = %id, "Ignoring toggle for disabled row");
        return state;
    }

    let checked = !state.row_checked(id, &row);
    if checked {
        state.selection.insert(id.clone());
    } else {
        state.selection.remove(id);
    }

    debug!(row = %id, checked, "Row selection toggled");
    state.push_event(TableEvent::CheckBoxChange { checked, row });
    state
}

/// Flip the header checkbox.
///
/// Checking selects every selectable page row; unchecking clears them. Emits
/// a `CheckBoxChange` per affected row followed by one
/// `IndeterminateCheckBoxChange` carrying all of them.
pub fn handle_toggle_all<T: Clone, O>(mut state: TableState<T, O>) -> TableState<T, O> {
    if !state.options.selectable || state.interaction_locked() {
        return state;
    }

    let affected: Vec<(RowId, T)> = state
        .selectable_page_rows()
        .map(|(id, row)| (id.clone(), row.clone()))
        .collect();
    if affected.is_empty() {
        return state;
    }

    let checked = !state.all_rows_checked();
    for (id, _) in &affected {
        if checked {
            state.selection.insert(id.clone());
        } else {
            state.selection.remove(id);
        }
    }

    info!(rows = affected.len(), checked, "Page selection toggled");
    let rows: Vec<T> = affected.into_iter().map(|(_, row)| row).collect();
    for row in &rows {
        state.push_event(TableEvent::CheckBoxChange {
            checked,
            row: row.clone(),
        });
    }
    state.push_event(TableEvent::IndeterminateCheckBoxChange { checked, rows });
    state
}

/// Clear the selection without emitting events.
pub fn handle_reset_selected<T, O>(mut state: TableState<T, O>) -> TableState<T, O> {
    if !state.selection.is_empty() {
        debug!(cleared = state.selection.len(), "Selection reset");
        state.selection.clear();
    }
    state
}

#[cfg(test)]
#[path = "selection_handler_tests.rs"]
mod tests;
