//! Tri-state checkbox derivation for rows and the header.

use crate::model::RowId;
use crate::state::TableState;
use serde::Serialize;

/// Displayed state of one checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CheckState {
    /// Not selected.
    Unchecked,
    /// Selected.
    Checked,
    /// Some but not all selectable rows are checked (header only).
    Indeterminate,
}

impl CheckState {
    /// `Checked`, not `Indeterminate`.
    pub fn is_checked(self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

/// One checkbox as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckboxView {
    /// Displayed state.
    pub state: CheckState,
    /// Toggling this checkbox would be ignored.
    pub disabled: bool,
}

/// Checkbox of one page row; `None` when the table is not selectable.
pub fn row_checkbox<T, O>(state: &TableState<T, O>, id: &RowId, row: &T) -> Option<CheckboxView> {
    if !state.options().selectable {
        return None;
    }
    let checked = if state.row_checked(id, row) {
        CheckState::Checked
    } else {
        CheckState::Unchecked
    };
    Some(CheckboxView {
        state: checked,
        disabled: !state.is_row_selectable(row),
    })
}

/// Header checkbox; `None` when the table is not selectable.
///
/// Checked when the header predicate holds, indeterminate when only some
/// selectable rows are checked.
pub fn header_checkbox<T: Clone, O>(state: &TableState<T, O>) -> Option<CheckboxView> {
    if !state.options().selectable {
        return None;
    }
    let check = if state.all_rows_checked() {
        CheckState::Checked
    } else if state.any_row_checked() {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    };
    let disabled = state.interaction_locked() || state.selectable_page_rows().next().is_none();
    Some(CheckboxView {
        state: check,
        disabled,
    })
}
