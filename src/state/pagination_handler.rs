//! Page navigation and page size transitions.
//!
//! Paging is server-driven: these handlers update the engine's optimistic
//! page index and emit the intent; the owner's next `set_input` carries the
//! authoritative paging. Selection is page-scoped and cleared on every
//! page or page-size change.

use crate::model::TableEvent;
use crate::state::TableState;
use tracing::{debug, info};

/// Request page `page` (1-based).
///
/// No-op for the current page or pages outside `1..=total_pages`.
pub fn handle_go_to_page<T, O>(mut state: TableState<T, O>, page: usize) -> TableState<T, O> {
    let total_pages = state.paging.total_pages();
    let current = state.paging.current_page();
    if page == current || page < 1 || page > total_pages {
        debug!(page, current, total_pages, "Ignoring page change");
        return state;
    }

    state.selection.clear();
    state.paging = state.paging.with_page_index(page);
    info!(page, "Page changed");
    state.push_event(TableEvent::PaginationChange(page));
    state
}

/// Go back one page; disabled on the first page.
pub fn handle_previous_page<T, O>(state: TableState<T, O>) -> TableState<T, O> {
    let current = state.paging.current_page();
    if current <= 1 {
        return state;
    }
    handle_go_to_page(state, current - 1)
}

/// Go forward one page; disabled on the last page.
pub fn handle_next_page<T, O>(state: TableState<T, O>) -> TableState<T, O> {
    let current = state.paging.current_page();
    if current >= state.paging.total_pages() {
        return state;
    }
    handle_go_to_page(state, current + 1)
}

/// Switch to one of the configured page sizes and return to page 1.
///
/// Sizes not listed in `page_size_options`, and the current size, are ignored.
pub fn handle_set_page_size<T, O>(mut state: TableState<T, O>, size: usize) -> TableState<T, O> {
    if !state.options.page_size_options.contains(&size) {
        debug!(size, "Ignoring page size not in options");
        return state;
    }
    if size == state.paging.page_size() {
        return state;
    }

    state.selection.clear();
    state.paging = state.paging.with_page_size(size).with_page_index(1);
    info!(size, "Page size changed");
    state.push_event(TableEvent::PageSizeChange(size));
    state
}

#[cfg(test)]
#[path = "pagination_handler_tests.rs"]
mod tests;
