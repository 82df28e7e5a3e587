//! Acceptance tests for the render pipeline as seen on screen: skeleton
//! while the first page loads, overlay while a refetch is in flight, the
//! empty state, and expanded detail rows.

use crate::test_harness::{harness_config, members_jsonl, AcceptanceTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn skeleton_until_first_page_arrives() {
    // GIVEN: the first query has been sent but not answered
    let mut harness =
        AcceptanceTestHarness::from_jsonl_unsettled(&members_jsonl(25), &harness_config(), 80, 24)
            .expect("in-memory harness");

    // THEN: a placeholder row per page slot, no pagination bar yet
    let screen = harness.render_to_string();
    let skeleton_rows = screen.lines().filter(|l| l.starts_with("▒▒▒")).count();
    assert_eq!(skeleton_rows, 10, "screen:\n{screen}");
    assert!(!screen.contains("/ page"));
    assert!(screen.contains("fetching…"));

    // WHEN: the answer arrives
    harness.settle();

    // THEN: real rows
    let screen = harness.render_to_string();
    assert!(screen.contains("member-01"));
    assert!(!screen.contains("▒"));
    assert!(!screen.contains("fetching…"));
}

#[test]
fn refetch_keeps_rows_under_overlay() {
    let mut harness = AcceptanceTestHarness::with_members(25);

    harness.send_key_unsettled(KeyCode::Char('n'), KeyModifiers::NONE);

    harness.with_state(|s| assert!(s.is_loading()));
    let screen = harness.render_to_string();
    assert!(screen.contains("member-01"), "old rows stay visible");
    assert!(screen.contains("Loading…"));

    harness.settle();
    let screen = harness.render_to_string();
    assert!(screen.contains("member-11"));
    assert!(!screen.contains("Loading…"));
}

#[test]
fn empty_source_shows_empty_state_without_pagination() {
    let mut harness =
        AcceptanceTestHarness::from_jsonl("", &harness_config()).expect("in-memory harness");

    harness.with_state(|s| {
        assert!(s.is_no_data());
        assert!(!s.is_loading());
    });
    let screen = harness.render_to_string();
    assert!(screen.contains("members.jsonl has no records"), "screen:\n{screen}");
    assert!(!screen.contains("‹"));
}

#[test]
fn enter_expands_record_as_json() {
    let mut harness = AcceptanceTestHarness::with_members(5);
    harness.send_key(KeyCode::Char('j'));

    harness.send_key(KeyCode::Enter);

    harness.with_state(|s| assert_eq!(s.expanded().len(), 1));
    let screen = harness.render_to_string();
    let lines: Vec<&str> = screen.lines().collect();
    let row = lines
        .iter()
        .position(|l| l.contains("member-02"))
        .expect("row 2 on screen");
    assert_eq!(lines[row + 1].trim(), "{");
    let detail = &lines[row + 2..row + 5];
    assert!(
        detail.iter().any(|l| l.contains(r#""age": 22"#)),
        "detail: {detail:?}"
    );
    assert!(lines.iter().any(|l| l.contains("member-03")));

    harness.send_key(KeyCode::Enter);
    harness.with_state(|s| assert!(s.expanded().is_empty()));
}

#[test]
fn expansion_is_dropped_when_row_leaves_page() {
    let mut harness = AcceptanceTestHarness::with_members(25);
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Char('n'));

    harness.with_state(|s| assert!(s.expanded().is_empty()));
}

#[test]
fn malformed_lines_are_skipped() {
    let jsonl = format!("{}\nnot json\n[1,2]\n", members_jsonl(3));
    let harness =
        AcceptanceTestHarness::from_jsonl(&jsonl, &harness_config()).expect("in-memory harness");

    assert_eq!(harness.page_ids(), vec![1, 2, 3]);
    harness.with_state(|s| assert_eq!(s.paging().total(), 3));
}
