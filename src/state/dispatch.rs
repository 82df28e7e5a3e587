//! Route a [`TableAction`] to its handler.

use crate::model::TableAction;
use crate::state::{
    expand_handler, pagination_handler, pinning_handler, resize_handler, selection_handler,
    sort_handler, TableState,
};

/// Apply one command and return the new state.
pub fn dispatch<T: Clone, O>(state: TableState<T, O>, action: TableAction) -> TableState<T, O> {
    match action {
        TableAction::ToggleSort(column) => sort_handler::handle_toggle_sort(state, &column),
        TableAction::ResetSorting => sort_handler::handle_reset_sorting(state),

        TableAction::GoToPage(page) => pagination_handler::handle_go_to_page(state, page),
        TableAction::PreviousPage => pagination_handler::handle_previous_page(state),
        TableAction::NextPage => pagination_handler::handle_next_page(state),
        TableAction::SetPageSize(size) => pagination_handler::handle_set_page_size(state, size),

        TableAction::ToggleRow(id) => selection_handler::handle_toggle_row(state, &id),
        TableAction::ToggleAllRows => selection_handler::handle_toggle_all(state),
        TableAction::ResetSelected => selection_handler::handle_reset_selected(state),

        TableAction::ToggleExpanded(id) => expand_handler::handle_toggle_expanded(state, &id),

        TableAction::Pin { column, side } => pinning_handler::handle_pin(state, &column, side),

        TableAction::ResizeColumn { column, width } => {
            resize_handler::handle_resize_column(state, &column, width)
        }
        TableAction::StartResize { column, pointer_x } => {
            resize_handler::handle_start_resize(state, &column, pointer_x)
        }
        TableAction::DragResize { pointer_x } => {
            resize_handler::handle_drag_resize(state, pointer_x)
        }
        TableAction::EndResize => resize_handler::handle_end_resize(state),
    }
}
