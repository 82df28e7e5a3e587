//! Acceptance tests for column focus, pinning, resizing and horizontal
//! scrolling through the terminal host.

use crate::model::ColumnId;
use crate::test_harness::{harness_config, members_jsonl, AcceptanceTestHarness};
use crossterm::event::KeyCode;

fn col(raw: &str) -> ColumnId {
    ColumnId::new(raw).expect("valid id")
}

fn narrow_harness(width: u16) -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_jsonl_with_size(&members_jsonl(25), &harness_config(), width, 24)
        .expect("in-memory harness")
}

// ===== Pinning =====

#[test]
fn pin_left_moves_column_to_front() {
    let mut harness = AcceptanceTestHarness::with_members(5);
    harness.send_keys(&[KeyCode::Char('l'), KeyCode::Char('l'), KeyCode::Char('[')]);

    harness.with_state(|s| assert_eq!(s.pinning().left(), &[col("age")]));
    let screen = harness.render_to_string();
    let header = screen.lines().next().unwrap_or_default();
    assert!(header.starts_with("[ ] age"), "header: {header}");
    assert!(header.contains("│"), "boundary separator drawn: {header}");
}

#[test]
fn pin_left_then_right_leaves_only_right() {
    let mut harness = AcceptanceTestHarness::with_members(5);
    harness.send_key(KeyCode::Char('l'));

    harness.send_keys(&[KeyCode::Char('['), KeyCode::Char(']')]);

    harness.with_state(|s| {
        assert!(s.pinning().left().is_empty());
        assert_eq!(s.pinning().right(), &[col("name")]);
    });
    assert_eq!(harness.focused(), Some(col("name")), "focus follows the column");
}

#[test]
fn unpin_restores_definition_order() {
    let mut harness = AcceptanceTestHarness::with_members(5);
    harness.send_keys(&[KeyCode::Char('l'), KeyCode::Char('l'), KeyCode::Char('[')]);

    harness.send_key(KeyCode::Char('u'));

    harness.with_state(|s| assert!(s.pinning().is_empty()));
    let screen = harness.render_to_string();
    assert!(screen.starts_with("[ ] id"), "screen:\n{screen}");
}

#[test]
fn pinning_never_refetches() {
    let mut harness = AcceptanceTestHarness::with_members(25);
    harness.send_key(KeyCode::Char('['));
    assert!(!harness.is_fetching());
}

// ===== Resizing =====

#[test]
fn plus_and_minus_resize_focused_column() {
    let mut harness = AcceptanceTestHarness::with_members(5);

    harness.send_key(KeyCode::Char('+'));
    harness.with_state(|s| assert_eq!(s.column_width(&col("id")), Some(14)));

    harness.send_keys(&[KeyCode::Char('-'), KeyCode::Char('-')]);
    harness.with_state(|s| assert_eq!(s.column_width(&col("id")), Some(10)));
}

#[test]
fn narrowing_stops_at_minimum_width() {
    let mut harness = AcceptanceTestHarness::with_members(5);

    for _ in 0..10 {
        harness.send_key(KeyCode::Char('-'));
    }

    harness.with_state(|s| {
        assert_eq!(
            s.column_width(&col("id")),
            Some(crate::integration::MIN_COLUMN_WIDTH)
        )
    });
}

#[test]
fn dragging_header_edge_resizes_column() {
    let mut harness = AcceptanceTestHarness::with_members(5);
    // id spans x = 4..16 behind the checkbox column; its last cell is x = 15
    harness.render_to_string();

    harness.press_at(15, 0);
    harness.with_state(|s| assert!(s.is_resizing()));

    harness.drag_to(20, 0);
    harness.with_state(|s| assert_eq!(s.column_width(&col("id")), Some(17)));

    harness.release_at(20, 0);
    harness.with_state(|s| {
        assert!(!s.is_resizing());
        assert_eq!(s.column_width(&col("id")), Some(17));
    });
}

#[test]
fn clicking_header_body_focuses_column() {
    let mut harness = AcceptanceTestHarness::with_members(5);

    // name spans x = 16..28
    harness.press_at(18, 0);

    assert_eq!(harness.focused(), Some(col("name")));
    harness.with_state(|s| assert!(!s.is_resizing()));
}

// ===== Horizontal scroll =====

#[test]
fn scroll_right_is_clamped_to_hidden_width() {
    // checkbox 4 + three 12-wide columns = 40 cells in a 30-cell terminal
    let mut harness = narrow_harness(30);

    harness.send_key(KeyCode::Char('>'));
    assert_eq!(harness.scroll_x(), 4);
    harness.send_keys(&[KeyCode::Char('>'), KeyCode::Char('>'), KeyCode::Char('>')]);
    assert_eq!(harness.scroll_x(), 10);

    harness.send_key(KeyCode::Char('<'));
    assert_eq!(harness.scroll_x(), 6);
}

#[test]
fn focusing_hidden_column_scrolls_it_into_view() {
    let mut harness = narrow_harness(30);

    harness.send_keys(&[KeyCode::Char('l'), KeyCode::Char('l')]);

    assert_eq!(harness.focused(), Some(col("age")));
    assert_eq!(harness.scroll_x(), 10);
    let screen = harness.render_to_string();
    assert!(screen.lines().next().unwrap_or_default().contains("age"));
}

#[test]
fn pinned_column_stays_put_while_scrolling() {
    let mut harness = narrow_harness(30);
    harness.send_key(KeyCode::Char('['));

    harness.send_keys(&[KeyCode::Char('>'), KeyCode::Char('>')]);

    let screen = harness.render_to_string();
    let header = screen.lines().next().unwrap_or_default();
    assert!(header.starts_with("[ ] id"), "header: {header}");
}
