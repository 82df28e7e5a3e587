//! Paging metadata and sanitization of raw caller input.
//!
//! Callers hand over whatever their data source reported, possibly `NaN`,
//! negative or fractional. [`PagingData::from_input`] turns that into values
//! that are always safe to divide by and to render.

use serde::{Deserialize, Serialize};

/// Page size used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// First page; page indices are 1-based.
pub const DEFAULT_PAGE_INDEX: usize = 1;

/// Selectable page sizes offered when the caller supplies none.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 10_000;

/// Unvalidated paging metadata as reported by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingInput {
    /// Rows in the whole dataset.
    pub total: f64,
    /// 1-based page number.
    pub page_index: f64,
    /// Rows per page.
    pub page_size: f64,
}

/// Validated paging metadata: `total ≥ 0`, `page_index ≥ 1`, `0 < page_size ≤ MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingData {
    total: usize,
    page_index: usize,
    page_size: usize,
}

impl Default for PagingData {
    fn default() -> Self {
        Self {
            total: 0,
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingData {
    /// Build paging data, substituting defaults for out-of-range values.
    pub fn new(total: usize, page_index: usize, page_size: usize) -> Self {
        Self {
            total,
            page_index: page_index.max(DEFAULT_PAGE_INDEX),
            page_size: sanitize_page_size(page_size),
        }
    }

    /// Sanitize raw input.
    ///
    /// Non-finite values and values below the valid range are replaced by
    /// the defaults (`total = 0`, `page_index = 1`, `page_size = 10`);
    /// finite values are floored first.
    pub fn from_input(input: PagingInput) -> Self {
        let total = sanitize_count(input.total, 0.0, 0);
        let page_index = sanitize_count(input.page_index, 1.0, DEFAULT_PAGE_INDEX);
        let page_size = sanitize_count(input.page_size, 1.0, DEFAULT_PAGE_SIZE);
        Self::new(total, page_index, page_size)
    }

    /// Rows in the whole dataset.
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based page number as requested, not clamped.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero for an empty dataset.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Page index clamped into `1..=total_pages` (1 when there are no pages).
    pub fn current_page(&self) -> usize {
        self.page_index.clamp(DEFAULT_PAGE_INDEX, self.total_pages().max(1))
    }

    /// Same dataset, another page.
    pub fn with_page_index(self, page_index: usize) -> Self {
        Self::new(self.total, page_index, self.page_size)
    }

    /// Same dataset and page, another page size.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(self.total, self.page_index, page_size)
    }

    /// 1-based number of the first row on the current page, 0 when empty.
    pub fn first_row_number(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        let start = (self.current_page() - 1).saturating_mul(self.page_size);
        (start + 1).min(self.total)
    }

    /// 1-based number of the last row on the current page, 0 when empty.
    pub fn last_row_number(&self) -> usize {
        self.current_page()
            .saturating_mul(self.page_size)
            .min(self.total)
    }
}

impl From<PagingInput> for PagingData {
    fn from(input: PagingInput) -> Self {
        Self::from_input(input)
    }
}

/// Errors for page sizes supplied through configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    /// A page size of zero.
    #[error("Page size cannot be zero")]
    Zero,
    /// Above [`MAX_PAGE_SIZE`].
    #[error("Page size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested size.
        size: usize,
        /// [`MAX_PAGE_SIZE`].
        max: usize,
    },
}

/// Validate a page size without substituting a default.
pub fn check_page_size(size: usize) -> Result<usize, InvalidPageSize> {
    match size {
        0 => Err(InvalidPageSize::Zero),
        s if s > MAX_PAGE_SIZE => Err(InvalidPageSize::TooLarge {
            size: s,
            max: MAX_PAGE_SIZE,
        }),
        s => Ok(s),
    }
}

fn sanitize_page_size(page_size: usize) -> usize {
    match page_size {
        0 => DEFAULT_PAGE_SIZE,
        s => s.min(MAX_PAGE_SIZE),
    }
}

fn sanitize_count(raw: f64, min: f64, fallback: usize) -> usize {
    if !raw.is_finite() {
        return fallback;
    }
    let floored = raw.floor();
    if floored < min {
        return fallback;
    }
    // `as` saturates for floats beyond usize::MAX
    floored as usize
}

#[cfg(test)]
#[path = "paging_tests.rs"]
mod tests;
