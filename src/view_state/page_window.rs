//! Compact page-number windows for pagination controls.
//!
//! Pure functions mapping `(total, page_size, page_index)` to the sequence
//! of page buttons and ellipses to render. Two presentations exist because
//! the available width differs: a wide one (up to seven slots) and a narrow
//! one (up to five).

use serde::Serialize;

/// Largest page count the wide window shows without ellipses.
pub const WIDE_FULL_LIMIT: usize = 7;

/// Largest page count the narrow window shows without ellipses.
pub const NARROW_FULL_LIMIT: usize = 3;

/// One slot of a pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageItem {
    /// A 1-based page button.
    Page(usize),
    /// A gap marker.
    Ellipsis,
}

impl PageItem {
    /// Page number of a button; `None` for an ellipsis.
    pub fn page(self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(n),
            PageItem::Ellipsis => None,
        }
    }
}

/// Which windowing rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowVariant {
    /// Up to seven slots.
    #[default]
    Wide,
    /// Up to five slots, for constrained widths.
    Narrow,
}

/// `ceil(total / page_size)`; zero when `page_size` is zero.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Window for a dataset of `total` rows.
///
/// Empty when there are no pages. `page_index` is clamped into
/// `1..=total_pages` first.
pub fn compute_window(
    total: usize,
    page_size: usize,
    page_index: usize,
    variant: WindowVariant,
) -> Vec<PageItem> {
    let n = total_pages(total, page_size);
    if n == 0 {
        return Vec::new();
    }
    let p = page_index.clamp(1, n);
    match variant {
        WindowVariant::Wide => wide_window(n, p),
        WindowVariant::Narrow => narrow_window(n, p),
    }
}

/// Wide window for `n` pages with current page `p` (`1 ≤ p ≤ n`).
pub fn wide_window(n: usize, p: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if n <= WIDE_FULL_LIMIT {
        return (1..=n).map(Page).collect();
    }
    if p <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(n)]
    } else if p >= n - 2 {
        vec![Page(1), Ellipsis, Page(n - 3), Page(n - 2), Page(n - 1), Page(n)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(p - 1),
            Page(p),
            Page(p + 1),
            Ellipsis,
            Page(n),
        ]
    }
}

/// Narrow window for `n` pages with current page `p` (`1 ≤ p ≤ n`).
pub fn narrow_window(n: usize, p: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if n <= NARROW_FULL_LIMIT {
        return (1..=n).map(Page).collect();
    }
    if p == 1 {
        vec![Page(1), Page(2), Ellipsis, Page(n)]
    } else if p == n {
        vec![Page(1), Ellipsis, Page(n - 1), Page(n)]
    } else if p == 2 {
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(n)]
    } else if p == n - 1 {
        vec![Page(1), Ellipsis, Page(n - 2), Page(n - 1), Page(n)]
    } else {
        vec![Page(1), Ellipsis, Page(p), Ellipsis, Page(n)]
    }
}

#[cfg(test)]
#[path = "page_window_tests.rs"]
mod tests;
