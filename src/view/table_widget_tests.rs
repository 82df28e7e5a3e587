//! Tests for table geometry, text fitting and rendering.

use super::*;
use crate::model::RowId;
use crate::test_harness::buffer_to_string;
use crate::view::styles::ColorConfig;
use crate::view_state::ColumnPlacement;
use ratatui::style::Modifier;

// ===== Helpers =====

fn id(raw: &str) -> ColumnId {
    ColumnId::new(raw).expect("valid id")
}

fn header(column: &str, label: &str, width: u32) -> HeaderCell {
    HeaderCell {
        placement: ColumnPlacement {
            column: id(column),
            index: 0,
            width,
            pin: None,
            offset: None,
            boundary_shadow: false,
        },
        label: label.to_string(),
        sortable: true,
        pinnable: true,
        sort: None,
    }
}

fn pinned(mut cell: HeaderCell, side: PinSide, offset: u32, shadow: bool) -> HeaderCell {
    cell.placement.pin = Some(side);
    cell.placement.offset = Some(offset);
    cell.placement.boundary_shadow = shadow;
    cell
}

fn row(key: &str, cells: &[&str]) -> RowView<String> {
    RowView {
        id: RowId::Key(key.to_string()),
        checkbox: None,
        cells: cells.iter().map(|c| c.to_string()).collect(),
        expandable: true,
        expanded: None,
    }
}

fn view_with(headers: Vec<HeaderCell>, body: TableBody<String>) -> TableView<String> {
    TableView {
        header_checkbox: None,
        headers,
        body,
        pagination: None,
        is_resizing: false,
    }
}

fn populated(headers: Vec<HeaderCell>, rows: Vec<RowView<String>>) -> TableView<String> {
    view_with(
        headers,
        TableBody::Populated {
            rows,
            overlay: false,
        },
    )
}

fn people() -> TableView<String> {
    populated(
        vec![header("id", "ID", 6), header("name", "Name", 10)],
        vec![row("a", &["a", "Ada"]), row("b", &["b", "Grace Hopper"])],
    )
}

fn plain_styles() -> TableStyles {
    TableStyles::with_color_config(ColorConfig::from_env_and_args(true))
}

fn render(widget: TableWidget<'_>, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf);
    buf
}

// ===== Geometry =====

#[test]
fn unpinned_columns_follow_checkbox_column() {
    let mut view = people();
    view.header_checkbox = Some(CheckboxView {
        state: CheckState::Unchecked,
        disabled: false,
    });

    let geometry = column_geometry(&view, 40, 0);

    assert!(geometry.checkbox);
    assert_eq!(geometry.spans[0].x, CHECKBOX_COLUMN_WIDTH);
    assert_eq!(geometry.spans[1].x, CHECKBOX_COLUMN_WIDTH + 6);
    assert_eq!(geometry.left_separator, None);
    assert_eq!(geometry.right_separator, None);
}

#[test]
fn left_pin_sits_at_offset_with_separator_after_it() {
    let view = populated(
        vec![
            pinned(header("id", "ID", 8), PinSide::Left, 0, true),
            header("name", "Name", 20),
        ],
        Vec::new(),
    );

    let geometry = column_geometry(&view, 40, 0);

    assert_eq!(
        geometry.spans[0],
        ColumnSpan {
            header: 0,
            x: 0,
            width: 8,
            skip: 0
        }
    );
    assert_eq!(geometry.left_separator, Some(8));
    assert_eq!(geometry.center_start, 9);
    assert_eq!(geometry.spans[1].x, 9);
}

#[test]
fn right_pins_measure_offsets_from_right_edge() {
    let view = populated(
        vec![
            header("name", "Name", 10),
            pinned(header("age", "Age", 6), PinSide::Right, 5, true),
            pinned(header("active", "Active", 5), PinSide::Right, 0, false),
        ],
        Vec::new(),
    );

    let geometry = column_geometry(&view, 40, 0);

    assert_eq!(geometry.spans[1].x, 40 - 5 - 6);
    assert_eq!(geometry.spans[2].x, 35);
    assert_eq!(geometry.right_separator, Some(40 - 11 - 1));
    assert_eq!(geometry.center_end, 28);
}

#[test]
fn scrolling_clips_centre_columns_only() {
    let view = populated(
        vec![
            pinned(header("id", "ID", 4), PinSide::Left, 0, true),
            header("a", "A", 10),
            header("b", "B", 10),
        ],
        Vec::new(),
    );

    let geometry = column_geometry(&view, 20, 5);

    assert_eq!(geometry.spans[0].x, 0, "pinned column does not scroll");
    assert_eq!(
        geometry.spans[1],
        ColumnSpan {
            header: 1,
            x: 5,
            width: 5,
            skip: 5
        }
    );
    assert_eq!(geometry.spans[2].x, 10);
    assert_eq!(geometry.spans[2].width, 10);
    assert_eq!(geometry.max_scroll(), 20 - 15);
}

#[test]
fn columns_scrolled_fully_out_are_dropped() {
    let view = populated(vec![header("a", "A", 10), header("b", "B", 10)], Vec::new());

    let geometry = column_geometry(&view, 10, 10);

    assert_eq!(geometry.spans.len(), 1);
    assert_eq!(geometry.spans[0].header, 1);
}

#[test]
fn reveal_column_scrolls_just_enough() {
    let view = populated(
        vec![header("a", "A", 10), header("b", "B", 10), header("c", "C", 10)],
        Vec::new(),
    );

    assert_eq!(reveal_column(&view, 15, &id("b"), 0), 5);
    assert_eq!(reveal_column(&view, 15, &id("a"), 12), 0);
    assert_eq!(reveal_column(&view, 15, &id("b"), 8), 8, "already visible");
    assert_eq!(reveal_column(&view, 15, &id("c"), 0), 15);
    assert_eq!(reveal_column(&view, 15, &id("zzz"), 3), 3);
}

#[test]
fn visible_start_keeps_cursor_on_screen() {
    assert_eq!(visible_start(&[1, 1, 1, 1], 0, 2), 0);
    assert_eq!(visible_start(&[1, 1, 1, 1], 3, 2), 2);
    assert_eq!(visible_start(&[1, 5, 1], 2, 4), 2, "tall sub-row pushes the window");
    assert_eq!(visible_start(&[1, 1], 9, 10), 0, "cursor clamped to last row");
    assert_eq!(visible_start(&[], 0, 10), 0);
}

// ===== Text fitting =====

#[test]
fn truncate_marks_cut_text_with_ellipsis() {
    assert_eq!(truncate("Grace Hopper", 9), "Grace Ho…");
    assert_eq!(truncate("Ada", 9), "Ada");
    assert_eq!(truncate("Ada", 0), "");
}

#[test]
fn column_cell_leaves_one_cell_gutter() {
    assert_eq!(column_cell("Ada", 6), "Ada   ");
    assert_eq!(column_cell("abcdef", 6), "abcd… ");
    assert_eq!(column_cell("line\nbreak", 12), "line break  ");
}

#[test]
fn slice_display_replaces_cut_wide_characters() {
    assert_eq!(slice_display("日本語", 1, 4), " 本 ");
    assert_eq!(slice_display("abcdef", 2, 3), "cde");
    assert_eq!(slice_display("ab", 0, 4), "ab  ");
}

#[test]
fn checkbox_glyphs_cover_three_states() {
    let glyph = |state: CheckState| {
        checkbox_glyph(CheckboxView {
            state,
            disabled: false,
        })
    };
    assert_eq!(glyph(CheckState::Unchecked), "[ ]");
    assert_eq!(glyph(CheckState::Checked), "[x]");
    assert_eq!(glyph(CheckState::Indeterminate), "[-]");
}

// ===== Rendering =====

#[test]
fn renders_header_and_rows() {
    let view = people();
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 4);

    assert_eq!(
        buffer_to_string(&buf),
        "ID    Name\na     Ada\nb     Grace Ho…"
    );
}

#[test]
fn sorted_header_shows_arrow() {
    let mut view = people();
    view.headers[1].sort = Some(SortDirection::Desc);
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 2);

    assert!(buffer_to_string(&buf).starts_with("ID    Name ▼"));
}

#[test]
fn cursor_row_is_highlighted() {
    let view = people();
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles).cursor(Some(1)), 20, 4);

    assert!(buf[(0, 2)].modifier.contains(Modifier::REVERSED));
    assert!(!buf[(0, 1)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn focused_header_uses_focus_style() {
    let view = people();
    let styles = plain_styles();
    let name = id("name");

    let buf = render(TableWidget::new(&view, &styles).focused(Some(&name)), 20, 2);

    assert!(buf[(6, 0)].modifier.contains(Modifier::REVERSED));
    assert!(!buf[(0, 0)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn checkboxes_render_in_leading_column() {
    let mut view = people();
    view.header_checkbox = Some(CheckboxView {
        state: CheckState::Indeterminate,
        disabled: false,
    });
    if let TableBody::Populated { rows, .. } = &mut view.body {
        rows[0].checkbox = Some(CheckboxView {
            state: CheckState::Checked,
            disabled: false,
        });
        rows[1].checkbox = Some(CheckboxView {
            state: CheckState::Unchecked,
            disabled: true,
        });
    }
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 24, 3);

    assert_eq!(
        buffer_to_string(&buf),
        "[-] ID    Name\n[x] a     Ada\n[ ] b     Grace Ho…"
    );
    assert!(buf[(0, 2)].modifier.contains(Modifier::DIM), "disabled checkbox is dimmed");
}

#[test]
fn pinned_boundary_draws_separator_on_every_row() {
    let view = populated(
        vec![
            pinned(header("id", "ID", 4), PinSide::Left, 0, true),
            header("name", "Name", 10),
        ],
        vec![row("a", &["a", "Ada"])],
    );
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 2);

    assert_eq!(buffer_to_string(&buf), "ID  │Name\na   │Ada");
}

#[test]
fn scrolled_view_keeps_pinned_column() {
    let view = populated(
        vec![
            pinned(header("id", "ID", 4), PinSide::Left, 0, true),
            header("name", "Name", 10),
            header("city", "City", 10),
        ],
        vec![row("a", &["a", "Ada", "London"])],
    );
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles).scroll_x(10), 15, 2);

    assert_eq!(buffer_to_string(&buf), "ID  │City\na   │London");
}

#[test]
fn skeleton_rows_fill_body_with_placeholders() {
    let view = view_with(
        vec![header("id", "ID", 6), header("name", "Name", 10)],
        TableBody::Skeleton(vec![
            SkeletonRow {
                cells: vec![SkeletonCell::Bar, SkeletonCell::AvatarWithText],
            };
            3
        ]),
    );
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 4);
    let text = buffer_to_string(&buf);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "▒▒▒▒▒ ● ▒▒▒▒▒▒▒");
}

#[test]
fn empty_state_is_centred() {
    let view = view_with(
        vec![header("id", "ID", 6)],
        TableBody::Empty(EmptyState::Default),
    );
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 21, 5);

    let text = buffer_to_string(&buf);
    assert_eq!(text.lines().nth(1), Some("       No data"));
}

#[test]
fn custom_empty_state_replaces_default_message() {
    let view = view_with(
        vec![header("id", "ID", 6)],
        TableBody::Empty(EmptyState::Custom("Nothing matched".to_string())),
    );
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 30, 3);

    let text = buffer_to_string(&buf);
    assert!(text.contains("Nothing matched"));
    assert!(!text.contains(DEFAULT_EMPTY_MESSAGE));
}

#[test]
fn overlay_dims_rows_and_shows_loading_label() {
    let mut view = people();
    view.body = TableBody::Populated {
        rows: view.rows().to_vec(),
        overlay: true,
    };
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 4);

    assert!(buffer_to_string(&buf).contains("Loading…"));
    assert!(buf[(0, 1)].modifier.contains(Modifier::DIM));
    assert!(!buf[(0, 0)].modifier.contains(Modifier::DIM), "header stays sharp");
}

#[test]
fn expanded_row_renders_sub_row_lines() {
    let mut view = people();
    if let TableBody::Populated { rows, .. } = &mut view.body {
        rows[0].expanded = Some("{\n  \"id\": \"a\"\n}".to_string());
    }
    let styles = plain_styles();

    let buf = render(TableWidget::new(&view, &styles), 20, 6);

    assert_eq!(
        buffer_to_string(&buf),
        "ID    Name\na     Ada\n{\n  \"id\": \"a\"\n}\nb     Grace Ho…"
    );
}

#[test]
fn zero_sized_area_renders_nothing() {
    let view = people();
    let styles = plain_styles();
    let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
    TableWidget::new(&view, &styles).render(Rect::new(0, 0, 0, 0), &mut buf);
    assert_eq!(buffer_to_string(&buf), "");
}
