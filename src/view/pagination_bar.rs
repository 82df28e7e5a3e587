//! Pagination bar: page buttons on the left, page size and row range on the
//! right.
//!
//! ```text
//! ‹ 1 … 9 [10] 11 … 20 ›                 10 / page · 91–100 of 200
//! ```

use crate::view::constants::{ELLIPSIS, NEXT_GLYPH, PREVIOUS_GLYPH};
use crate::view::styles::TableStyles;
use crate::view_state::{PageItem, PaginationView, WindowVariant};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Wide window unless the terminal is narrower than `narrow_width`.
pub fn window_variant(width: u16, narrow_width: u16) -> WindowVariant {
    if width < narrow_width {
        WindowVariant::Narrow
    } else {
        WindowVariant::Wide
    }
}

/// `10 / page · 91–100 of 200`
pub fn summary_text(view: &PaginationView) -> String {
    format!(
        "{} / page · {}–{} of {}",
        view.page_size, view.first_row, view.last_row, view.total
    )
}

fn nav_spans<'a>(view: &PaginationView, styles: &TableStyles) -> Vec<Span<'a>> {
    let nav = |enabled: bool| {
        if enabled {
            styles.page
        } else {
            styles.disabled_nav
        }
    };
    let mut spans = vec![Span::styled(PREVIOUS_GLYPH, nav(view.can_previous))];
    for item in &view.items {
        spans.push(Span::raw(" "));
        spans.push(match item {
            PageItem::Page(n) if view.is_current(*item) => {
                Span::styled(format!("[{}]", n), styles.current_page)
            }
            PageItem::Page(n) => Span::styled(n.to_string(), styles.page),
            PageItem::Ellipsis => Span::styled(ELLIPSIS, styles.disabled_nav),
        });
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(NEXT_GLYPH, nav(view.can_next)));
    spans
}

/// Draws the pagination controls; draws nothing when there are no pages.
pub struct PaginationBar<'a> {
    view: Option<&'a PaginationView>,
    styles: &'a TableStyles,
}

impl<'a> PaginationBar<'a> {
    /// Bar for `view`; `None` draws nothing.
    pub fn new(view: Option<&'a PaginationView>, styles: &'a TableStyles) -> Self {
        Self { view, styles }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = self.view else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let nav = Line::from(nav_spans(view, self.styles));
        let summary = summary_text(view);
        let needed = nav.width() + 2 + summary.width();

        nav.render(area, buf);
        if needed <= usize::from(area.width) {
            Line::styled(summary, self.styles.status)
                .right_aligned()
                .render(area, buf);
        }
    }
}
