//! Table widget: draws a `TableView<String>` into a terminal area.
//!
//! Column widths from the engine are taken as terminal cells. Left-pinned
//! columns sit at their sticky offsets after the checkbox column,
//! right-pinned columns at their offsets from the right edge, and the
//! unpinned columns scroll horizontally in the region between them.

use crate::model::{ColumnId, PinSide, SortDirection};
use crate::view::constants::{
    CHECKBOX_COLUMN_WIDTH, DEFAULT_EMPTY_MESSAGE, ELLIPSIS, HEADER_HEIGHT, LOADING_LABEL,
    PIN_SEPARATOR, PIN_SEPARATOR_WIDTH, SKELETON_AVATAR, SKELETON_GLYPH, SORT_ASC_GLYPH,
    SORT_DESC_GLYPH,
};
use crate::view::styles::TableStyles;
use crate::view_state::{
    CheckState, CheckboxView, EmptyState, HeaderCell, RowView, SkeletonCell, SkeletonRow,
    TableBody, TableView,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ===== Geometry =====

/// Visible part of one column on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Index into `TableView::headers`.
    pub header: usize,
    /// x relative to the widget area.
    pub x: u16,
    /// Visible width.
    pub width: u16,
    /// Leading cells of the column scrolled out of view.
    pub skip: u16,
}

/// Horizontal layout of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnGeometry {
    /// Visible columns, left to right.
    pub spans: Vec<ColumnSpan>,
    /// A checkbox column leads the row.
    pub checkbox: bool,
    /// x of the separator after the left-pinned columns.
    pub left_separator: Option<u16>,
    /// x of the separator before the right-pinned columns.
    pub right_separator: Option<u16>,
    /// Scrolled region, `[center_start, center_end)`.
    pub center_start: u16,
    /// End of the scrolled region, exclusive.
    pub center_end: u16,
    /// Combined width of the unpinned columns.
    pub center_content: u32,
}

impl ColumnGeometry {
    /// Width of the scrolled region.
    pub fn center_width(&self) -> u16 {
        self.center_end.saturating_sub(self.center_start)
    }

    /// Largest useful horizontal scroll.
    pub fn max_scroll(&self) -> u16 {
        let hidden = self
            .center_content
            .saturating_sub(u32::from(self.center_width()));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }
}

/// Place every column of `view` in an area `width` cells wide.
pub fn column_geometry(view: &TableView<String>, width: u16, scroll_x: u16) -> ColumnGeometry {
    let width = i64::from(width);
    let checkbox = view.header_checkbox.is_some();
    let base = if checkbox {
        i64::from(CHECKBOX_COLUMN_WIDTH)
    } else {
        0
    };
    let separator = i64::from(PIN_SEPARATOR_WIDTH);

    let pinned_width = |side: PinSide| -> i64 {
        view.headers
            .iter()
            .filter(|h| h.placement.pin == Some(side))
            .map(|h| i64::from(h.placement.width))
            .sum()
    };
    let has_boundary = |side: PinSide| {
        view.headers
            .iter()
            .any(|h| h.placement.pin == Some(side) && h.placement.boundary_shadow)
    };

    let left_width = pinned_width(PinSide::Left);
    let right_width = pinned_width(PinSide::Right);
    let left_separator = has_boundary(PinSide::Left).then_some(base + left_width);
    let right_separator = has_boundary(PinSide::Right).then_some(width - right_width - separator);

    let center_start = base + left_width + if left_separator.is_some() { separator } else { 0 };
    let center_end = (width - right_width - if right_separator.is_some() { separator } else { 0 })
        .max(center_start);

    let mut spans = Vec::with_capacity(view.headers.len());
    let mut center_x: i64 = 0;
    for (index, header) in view.headers.iter().enumerate() {
        let w = i64::from(header.placement.width);
        let offset = i64::from(header.placement.offset.unwrap_or(0));
        let span = match header.placement.pin {
            Some(PinSide::Left) => clip(index, base + offset, w, 0, width),
            Some(PinSide::Right) => clip(index, width - offset - w, w, 0, width),
            None => {
                let x = center_start + center_x - i64::from(scroll_x);
                center_x += w;
                clip(index, x, w, center_start, center_end)
            }
        };
        spans.extend(span);
    }

    ColumnGeometry {
        spans,
        checkbox,
        left_separator: left_separator.and_then(|x| cell_in(x, width)),
        right_separator: right_separator.and_then(|x| cell_in(x, width)),
        center_start: to_cells(center_start.min(width)),
        center_end: to_cells(center_end.min(width)),
        center_content: u32::try_from(center_x).unwrap_or(u32::MAX),
    }
}

/// Scroll needed to bring an unpinned column fully into view.
///
/// Pinned and unknown columns leave the scroll unchanged.
pub fn reveal_column(
    view: &TableView<String>,
    width: u16,
    column: &ColumnId,
    scroll_x: u16,
) -> u16 {
    let geometry = column_geometry(view, width, 0);
    let visible = u32::from(geometry.center_width());
    let scroll = u32::from(scroll_x);

    let mut start: u32 = 0;
    for header in view.headers.iter().filter(|h| h.placement.pin.is_none()) {
        let end = start.saturating_add(header.placement.width);
        if header.column() == column {
            let target = if start < scroll {
                start
            } else if end > scroll.saturating_add(visible) {
                end.saturating_sub(visible).min(start)
            } else {
                scroll
            };
            return u16::try_from(target)
                .unwrap_or(u16::MAX)
                .min(geometry.max_scroll());
        }
        start = end;
    }
    scroll_x
}

fn clip(header: usize, x: i64, w: i64, lo: i64, hi: i64) -> Option<ColumnSpan> {
    let start = x.max(lo);
    let end = (x + w).min(hi);
    if end <= start {
        return None;
    }
    Some(ColumnSpan {
        header,
        x: u16::try_from(start).ok()?,
        width: u16::try_from(end - start).ok()?,
        skip: u16::try_from(start - x).ok()?,
    })
}

fn cell_in(x: i64, width: i64) -> Option<u16> {
    if (0..width).contains(&x) {
        u16::try_from(x).ok()
    } else {
        None
    }
}

fn to_cells(x: i64) -> u16 {
    u16::try_from(x.max(0)).unwrap_or(u16::MAX)
}

/// First row to draw so that the cursor row fits in `capacity` lines.
///
/// `heights` holds the line count of every row, sub-rows included.
pub fn visible_start(heights: &[usize], cursor: usize, capacity: usize) -> usize {
    if heights.is_empty() || capacity == 0 {
        return 0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut start = cursor;
    let mut used = heights[cursor];
    while start > 0 && used + heights[start - 1] <= capacity {
        start -= 1;
        used += heights[start];
    }
    start
}

// ===== Text fitting =====

/// Replace control characters so one cell stays on one line.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Cut `text` to at most `max` display cells, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

fn pad(mut text: String, width: usize) -> String {
    let used = text.width();
    text.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    text
}

/// Full-width text of one column cell: content plus a one-cell gutter.
pub fn column_cell(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let inner = if width >= 2 { width - 1 } else { width };
    pad(truncate(&sanitize(text), inner), width)
}

/// The `take` display cells of `text` that follow the first `skip`.
///
/// A wide character cut by either edge becomes spaces.
pub fn slice_display(text: &str, skip: usize, take: usize) -> String {
    let mut out = String::new();
    let mut pos = 0;
    let mut used = 0;
    for ch in text.chars() {
        if used >= take {
            break;
        }
        let w = ch.width().unwrap_or(0);
        if w == 0 {
            if pos > skip && used > 0 {
                out.push(ch);
            }
            continue;
        }
        let start = pos;
        pos += w;
        if pos <= skip {
            continue;
        }
        if start < skip {
            let n = (pos - skip).min(take - used);
            out.extend(std::iter::repeat(' ').take(n));
            used += n;
        } else if used + w <= take {
            out.push(ch);
            used += w;
        } else {
            out.extend(std::iter::repeat(' ').take(take - used));
            used = take;
        }
    }
    pad(out, take)
}

fn header_text(header: &HeaderCell, width: u16) -> String {
    let arrow = match header.sort {
        Some(SortDirection::Asc) => Some(SORT_ASC_GLYPH),
        Some(SortDirection::Desc) => Some(SORT_DESC_GLYPH),
        None => None,
    };
    match arrow {
        Some(arrow) => {
            let width = usize::from(width);
            let room = width.saturating_sub(1 + 1 + arrow.width());
            let label = format!("{} {}", truncate(&sanitize(&header.label), room), arrow);
            pad(truncate(&label, width.saturating_sub(1)), width)
        }
        None => column_cell(&header.label, width),
    }
}

fn skeleton_text(cell: SkeletonCell, width: u16) -> String {
    let inner = usize::from(width).saturating_sub(1);
    let text = match cell {
        SkeletonCell::Bar => SKELETON_GLYPH.to_string().repeat(inner),
        SkeletonCell::AvatarWithText => {
            let bar = inner.saturating_sub(SKELETON_AVATAR.width());
            format!("{}{}", SKELETON_AVATAR, SKELETON_GLYPH.to_string().repeat(bar))
        }
    };
    column_cell(&text, width)
}

/// Glyph of a tri-state checkbox.
pub fn checkbox_glyph(checkbox: CheckboxView) -> &'static str {
    match checkbox.state {
        CheckState::Unchecked => "[ ]",
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
    }
}

// ===== Widget =====

/// Draws one table frame.
pub struct TableWidget<'a> {
    view: &'a TableView<String>,
    styles: &'a TableStyles,
    cursor: Option<usize>,
    focused: Option<&'a ColumnId>,
    scroll_x: u16,
}

impl<'a> TableWidget<'a> {
    /// Widget drawing `view`, unscrolled with no cursor.
    pub fn new(view: &'a TableView<String>, styles: &'a TableStyles) -> Self {
        Self {
            view,
            styles,
            cursor: None,
            focused: None,
            scroll_x: 0,
        }
    }

    /// Highlight the row at this index of the page.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Highlight this column's header.
    pub fn focused(mut self, column: Option<&'a ColumnId>) -> Self {
        self.focused = column;
        self
    }

    /// Scroll the unpinned columns by this many cells.
    pub fn scroll_x(mut self, scroll_x: u16) -> Self {
        self.scroll_x = scroll_x;
        self
    }

    fn checkbox_style(&self, checkbox: CheckboxView) -> Style {
        if checkbox.disabled {
            self.styles.disabled_checkbox
        } else {
            self.styles.checkbox
        }
    }

    /// Draw one line of checkbox, columns and separators.
    fn render_line(
        &self,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
        geometry: &ColumnGeometry,
        checkbox: Option<(&str, Style)>,
        cell: impl Fn(usize, u16) -> (String, Style),
    ) {
        if geometry.checkbox {
            if let Some((glyph, style)) = checkbox {
                let room = usize::from(CHECKBOX_COLUMN_WIDTH.min(area.width));
                buf.set_stringn(area.x, y, glyph, room, style);
            }
        }
        for span in &geometry.spans {
            let Some(header) = self.view.headers.get(span.header) else {
                continue;
            };
            let column_width = u16::try_from(header.placement.width).unwrap_or(u16::MAX);
            let (text, style) = cell(span.header, column_width);
            let visible = slice_display(&text, usize::from(span.skip), usize::from(span.width));
            buf.set_stringn(area.x + span.x, y, &visible, usize::from(span.width), style);
        }
        for x in [geometry.left_separator, geometry.right_separator]
            .into_iter()
            .flatten()
        {
            buf.set_string(area.x + x, y, PIN_SEPARATOR, self.styles.pin_boundary);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, geometry: &ColumnGeometry) {
        let checkbox = self
            .view
            .header_checkbox
            .map(|cb| (checkbox_glyph(cb), self.checkbox_style(cb)));
        self.render_line(buf, area, area.y, geometry, checkbox, |index, width| {
            let header = &self.view.headers[index];
            let style = if self.focused == Some(header.column()) {
                self.styles.focused_header
            } else if header.sort.is_some() {
                self.styles.sorted_header
            } else {
                self.styles.header
            };
            (header_text(header, width), style)
        });
    }

    fn render_skeleton(
        &self,
        body: Rect,
        buf: &mut Buffer,
        geometry: &ColumnGeometry,
        rows: &[SkeletonRow],
    ) {
        let glyph = SKELETON_GLYPH.to_string().repeat(3);
        for (row, y) in rows.iter().zip(body.top()..body.bottom()) {
            let checkbox = Some((glyph.as_str(), self.styles.skeleton));
            self.render_line(buf, body, y, geometry, checkbox, |index, width| {
                let cell = row.cells.get(index).copied().unwrap_or(SkeletonCell::Bar);
                (skeleton_text(cell, width), self.styles.skeleton)
            });
        }
    }

    fn render_empty(&self, body: Rect, buf: &mut Buffer, empty: &EmptyState<String>) {
        let text = match empty {
            EmptyState::Custom(text) => text.as_str(),
            EmptyState::Default => DEFAULT_EMPTY_MESSAGE,
        };
        let lines: Vec<&str> = text.lines().collect();
        let count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let top = body.y + body.height.saturating_sub(count) / 2;
        for (line, y) in lines.iter().zip(top..body.bottom()) {
            let line = truncate(&sanitize(line), usize::from(body.width));
            let w = u16::try_from(line.width()).unwrap_or(body.width);
            let x = body.x + body.width.saturating_sub(w) / 2;
            buf.set_stringn(x, y, &line, usize::from(body.width), self.styles.empty);
        }
    }

    fn render_rows(
        &self,
        body: Rect,
        buf: &mut Buffer,
        geometry: &ColumnGeometry,
        rows: &[RowView<String>],
    ) {
        let heights: Vec<usize> = rows
            .iter()
            .map(|row| 1 + row.expanded.as_ref().map_or(0, |text| text.lines().count()))
            .collect();
        let cursor = self.cursor.filter(|c| *c < rows.len());
        let start = visible_start(&heights, cursor.unwrap_or(0), usize::from(body.height));
        let indent = if geometry.checkbox {
            CHECKBOX_COLUMN_WIDTH.min(body.width)
        } else {
            0
        };

        let mut y = body.y;
        for (index, row) in rows.iter().enumerate().skip(start) {
            if y >= body.bottom() {
                break;
            }
            let checked = row.checkbox.is_some_and(|cb| cb.state.is_checked());
            let cell_style = if checked {
                self.styles.selected_row
            } else {
                Style::default()
            };
            let checkbox = row
                .checkbox
                .map(|cb| (checkbox_glyph(cb), self.checkbox_style(cb)));
            self.render_line(buf, body, y, geometry, checkbox, |i, width| {
                let text = row.cells.get(i).map(String::as_str).unwrap_or("");
                (column_cell(text, width), cell_style)
            });
            if cursor == Some(index) {
                buf.set_style(Rect::new(body.x, y, body.width, 1), self.styles.cursor_row);
            }
            y += 1;

            if let Some(expanded) = &row.expanded {
                for line in expanded.lines() {
                    if y >= body.bottom() {
                        break;
                    }
                    buf.set_stringn(
                        body.x + indent,
                        y,
                        sanitize(line),
                        usize::from(body.width - indent),
                        self.styles.expanded,
                    );
                    y += 1;
                }
            }
        }
    }

    fn render_overlay(&self, body: Rect, buf: &mut Buffer) {
        buf.set_style(body, self.styles.overlay);
        let label_width = u16::try_from(LOADING_LABEL.width()).unwrap_or(body.width);
        let x = body.x + body.width.saturating_sub(label_width) / 2;
        let y = body.y + body.height / 2;
        buf.set_stringn(
            x,
            y,
            LOADING_LABEL,
            usize::from(body.width),
            self.styles.overlay_label,
        );
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let geometry = column_geometry(self.view, area.width, self.scroll_x);
        self.render_header(area, buf, &geometry);

        let body = Rect {
            y: area.y + HEADER_HEIGHT.min(area.height),
            height: area.height.saturating_sub(HEADER_HEIGHT),
            ..area
        };
        if body.height == 0 {
            return;
        }
        match &self.view.body {
            TableBody::Skeleton(rows) => self.render_skeleton(body, buf, &geometry, rows),
            TableBody::Empty(empty) => self.render_empty(body, buf, empty),
            TableBody::Populated { rows, overlay } => {
                self.render_rows(body, buf, &geometry, rows);
                if *overlay {
                    self.render_overlay(body, buf);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "table_widget_tests.rs"]
mod tests;
