//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> over an in-memory JSONL source answered inline.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::ColumnId;
use crate::source::{Fetcher, JsonlSource, Record};
use crate::state::TableState;
use crate::view::{mount_table, CliArgs, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Blank lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// `count` member records: `{"id": n, "name": "member-nn", "age": 20 + n % 50}`.
pub(crate) fn members_jsonl(count: usize) -> String {
    (1..=count)
        .map(|n| {
            format!(
                r#"{{"id":{},"name":"member-{:02}","age":{}}}"#,
                n,
                n,
                20 + n % 50
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Config for harness tables: `id, name, age` columns, page size 10.
pub(crate) fn harness_config() -> ResolvedConfig {
    ResolvedConfig {
        page_size: 10,
        page_size_options: vec![10, 25, 50],
        columns: vec!["id".to_string(), "name".to_string(), "age".to_string()],
        column_width: 12,
        ..ResolvedConfig::default()
    }
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend>. Keys are followed by applying any responses
/// the inline source produced, unless sent with `send_key_unsettled`.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load JSONL text into a test app with default terminal size (80x24)
    pub fn from_jsonl(jsonl: &str, config: &ResolvedConfig) -> Result<Self, TuiError> {
        Self::from_jsonl_with_size(jsonl, config, 80, 24)
    }

    /// Load JSONL text with custom terminal size
    ///
    /// The first page is requested and applied before returning.
    pub fn from_jsonl_with_size(
        jsonl: &str,
        config: &ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let mut harness = Self::from_jsonl_unsettled(jsonl, config, width, height)?;
        harness.settle();
        Ok(harness)
    }

    /// Like `from_jsonl_with_size`, but the first page is left queued.
    pub fn from_jsonl_unsettled(
        jsonl: &str,
        config: &ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let source = JsonlSource::from_reader(jsonl.as_bytes(), config.key_field.as_deref())?;
        let (table, fetch) = mount_table(&source, config, "members.jsonl");
        let args = CliArgs::new("members.jsonl", config.narrow_width, true);

        let app = TuiApp::new_for_test(
            terminal,
            table,
            Fetcher::inline(source),
            fetch,
            KeyBindings::default(),
            args,
        );

        Ok(Self { app, running: true })
    }

    /// `count` members with the default harness config.
    pub fn with_members(count: usize) -> Self {
        Self::from_jsonl(&members_jsonl(count), &harness_config())
            .expect("in-memory harness should build")
    }

    /// Send a single key and apply the responses it produced
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        let quit = self.send_key_unsettled(key, mods);
        self.settle();
        quit
    }

    /// Send a key but leave its responses queued, as if the source were slow.
    pub fn send_key_unsettled(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Apply every queued response. Returns true if the table changed.
    pub fn settle(&mut self) -> bool {
        self.app.poll_fetch_test()
    }

    /// Press the left button at `(column, row)`.
    pub fn press_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Drag with the left button held to `(column, row)`.
    pub fn drag_to(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    /// Release the left button at `(column, row)`.
    pub fn release_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.settle();
    }

    /// Read the engine state for assertions.
    pub fn with_state<R>(&self, f: impl FnOnce(&TableState<Record>) -> R) -> R {
        self.app.table().with_state(f)
    }

    /// Page the host will ask for next.
    pub fn requested_page(&self) -> usize {
        self.app.fetch_controller().page_index()
    }

    pub fn is_fetching(&self) -> bool {
        self.app.fetch_controller().is_pending()
    }

    pub fn cursor(&self) -> usize {
        self.app.cursor()
    }

    pub fn focused(&self) -> Option<ColumnId> {
        self.app.focused()
    }

    pub fn scroll_x(&self) -> u16 {
        self.app.scroll_x()
    }

    /// `id` values of the rows on the current page, in order.
    pub fn page_ids(&self) -> Vec<i64> {
        self.with_state(|state| {
            state
                .page_rows()
                .filter_map(|(_, record)| record.get("id").and_then(|v| v.as_i64()))
                .collect()
        })
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
