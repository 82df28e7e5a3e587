//! Pagination control view model.

use crate::model::PagingData;
use crate::view_state::page_window::{compute_window, PageItem, WindowVariant};
use serde::Serialize;

/// Everything a host needs to draw pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// Page buttons and gaps to draw.
    pub items: Vec<PageItem>,
    /// Current page, clamped into `1..=total_pages`.
    pub current: usize,
    /// `ceil(total / page_size)`.
    pub total_pages: usize,
    /// A previous page exists.
    pub can_previous: bool,
    /// A next page exists.
    pub can_next: bool,
    /// Rows per page.
    pub page_size: usize,
    /// Sizes offered by the page-size control.
    pub page_size_options: Vec<usize>,
    /// 1-based number of the first row on this page.
    pub first_row: usize,
    /// 1-based number of the last row on this page.
    pub last_row: usize,
    /// Rows in the whole dataset.
    pub total: usize,
}

impl PaginationView {
    /// Derive controls for `paging`, or `None` when there is nothing to page.
    pub fn derive(
        paging: PagingData,
        page_size_options: &[usize],
        variant: WindowVariant,
    ) -> Option<Self> {
        let total_pages = paging.total_pages();
        if total_pages == 0 {
            return None;
        }
        let current = paging.current_page();
        Some(Self {
            items: compute_window(paging.total(), paging.page_size(), current, variant),
            current,
            total_pages,
            can_previous: current > 1,
            can_next: current < total_pages,
            page_size: paging.page_size(),
            page_size_options: page_size_options.to_vec(),
            first_row: paging.first_row_number(),
            last_row: paging.last_row_number(),
            total: paging.total(),
        })
    }

    /// Whether `page` is the highlighted button.
    pub fn is_current(&self, item: PageItem) -> bool {
        item.page() == Some(self.current)
    }
}
