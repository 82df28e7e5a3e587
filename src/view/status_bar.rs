//! Status bar: source, active sort, selection count and fetch state, with
//! key hints on the right when they fit.

use crate::model::{SortDirection, SortState};
use crate::view::constants::{SORT_ASC_GLYPH, SORT_DESC_GLYPH};
use crate::view::styles::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "s sort  [ ] pin  space select  enter detail  n/p page  q quit";

/// Everything the status bar reports.
pub struct StatusBar<'a> {
    /// Label of the data source.
    pub source: &'a str,
    /// Active sort.
    pub sort: Option<&'a SortState>,
    /// Number of selected rows.
    pub selected: usize,
    /// A page query is outstanding.
    pub fetching: bool,
    /// Last source error, if any.
    pub error: Option<&'a str>,
    /// Screen styles.
    pub styles: &'a TableStyles,
}

impl StatusBar<'_> {
    /// Left-hand summary, e.g. `members.jsonl · age ▼ · 3 selected`.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.source.to_string()];
        if let Some(sort) = self.sort {
            let arrow = match sort.direction {
                SortDirection::Asc => SORT_ASC_GLYPH,
                SortDirection::Desc => SORT_DESC_GLYPH,
            };
            parts.push(format!("{} {}", sort.column, arrow));
        }
        if self.selected > 0 {
            parts.push(format!("{} selected", self.selected));
        }
        if self.fetching {
            parts.push("fetching…".to_string());
        }
        parts.join(" · ")
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut spans = vec![Span::styled(self.summary(), self.styles.status)];
        if let Some(error) = self.error {
            spans.push(Span::raw(" · "));
            spans.push(Span::styled(error.to_string(), self.styles.error));
        }
        let left = Line::from(spans);
        let needed = left.width() + 2 + KEY_HINTS.chars().count();

        left.render(area, buf);
        if needed <= usize::from(area.width) {
            Line::styled(KEY_HINTS, self.styles.status)
                .right_aligned()
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnId;
    use crate::test_harness::buffer_to_string;
    use crate::view::styles::ColorConfig;

    fn styles() -> TableStyles {
        TableStyles::with_color_config(ColorConfig::from_env_and_args(true))
    }

    fn bar<'a>(styles: &'a TableStyles, sort: Option<&'a SortState>) -> StatusBar<'a> {
        StatusBar {
            source: "members.jsonl",
            sort,
            selected: 0,
            fetching: false,
            error: None,
            styles,
        }
    }

    #[test]
    fn summary_lists_only_active_parts() {
        let styles = styles();
        assert_eq!(bar(&styles, None).summary(), "members.jsonl");

        let sort = SortState::new(ColumnId::new("age").unwrap(), SortDirection::Desc);
        let status = StatusBar {
            selected: 3,
            fetching: true,
            ..bar(&styles, Some(&sort))
        };
        assert_eq!(
            status.summary(),
            "members.jsonl · age ▼ · 3 selected · fetching…"
        );
    }

    #[test]
    fn hints_shown_when_wide_enough() {
        let styles = styles();
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 1));
        bar(&styles, None).render(buf.area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.starts_with("members.jsonl"));
        assert!(text.ends_with("q quit"));
    }

    #[test]
    fn hints_dropped_on_narrow_terminal() {
        let styles = styles();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        bar(&styles, None).render(buf.area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "members.jsonl");
    }

    #[test]
    fn error_is_appended() {
        let styles = styles();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        StatusBar {
            error: Some("source unavailable"),
            ..bar(&styles, None)
        }
        .render(buf.area, &mut buf);

        assert_eq!(
            buffer_to_string(&buf),
            "members.jsonl · source unavailable"
        );
    }
}
