//! TUI rendering and terminal management (impure shell)
//!
//! `TuiApp` plays the owning screen: it maps keys to table commands, drains
//! the table's intents into page queries, hands the queries to a source and
//! feeds the answers back as table input.

pub mod constants;
mod layout;
mod pagination_bar;
mod status_bar;
mod styles;
mod table_widget;

pub use layout::{split_screen, ScreenAreas};
pub use pagination_bar::{summary_text, window_variant, PaginationBar};
pub use status_bar::StatusBar;
pub use styles::{ColorConfig, TableStyles};
pub use table_widget::{
    checkbox_glyph, column_geometry, reveal_column, visible_start, ColumnGeometry, ColumnSpan,
    TableWidget,
};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::integration::{self, FetchController};
use crate::model::{ColumnId, InputError, KeyAction, PinSide, TableAction};
use crate::source::{Fetcher, JsonlSource, Record, SourceWorker};
use crate::state::{ResetHandle, TableInstance};
use crate::view::constants::{RESIZE_STEP, SCROLL_STEP};
use crate::view_state::TableView;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Record source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// CLI-derived settings for the TUI.
///
/// Lives in the view module because it configures the rendering layer, not
/// the table engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Shown in the status bar, usually the file name.
    pub source_label: String,
    /// Below this terminal width the pagination bar uses the narrow window.
    pub narrow_width: u16,
    /// Maps to `--no-color`; `NO_COLOR` is honoured as well.
    pub no_color: bool,
}

impl CliArgs {
    /// Bundle the host arguments.
    pub fn new(source_label: impl Into<String>, narrow_width: u16, no_color: bool) -> Self {
        Self {
            source_label: source_label.into(),
            narrow_width,
            no_color,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    table: TableInstance<Record>,
    reset: ResetHandle<Record>,
    fetcher: Fetcher,
    fetch: FetchController,
    key_bindings: KeyBindings,
    styles: TableStyles,
    source_label: String,
    narrow_width: u16,
    /// Index of the highlighted row on the current page.
    cursor: usize,
    /// Column targeted by column commands; the first column when unset.
    focused: Option<ColumnId>,
    scroll_x: u16,
    /// Last fetch failure, shown in the status bar.
    error: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture,
    /// and requests the first page.
    pub fn new(
        table: TableInstance<Record>,
        fetcher: Fetcher,
        fetch: FetchController,
        args: CliArgs,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            table,
            fetcher,
            fetch,
            KeyBindings::default(),
            args,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after input, resizes
    /// and applied fetch results.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(50);

        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_fetch() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        table: TableInstance<Record>,
        fetcher: Fetcher,
        fetch: FetchController,
        key_bindings: KeyBindings,
        args: CliArgs,
    ) -> Self {
        let reset = table.reset_handle();
        let mut app = Self {
            terminal,
            table,
            reset,
            fetcher,
            fetch,
            key_bindings,
            styles: TableStyles::with_color_config(ColorConfig::from_env_and_args(
                args.no_color,
            )),
            source_label: args.source_label,
            narrow_width: args.narrow_width,
            cursor: 0,
            focused: None,
            scroll_x: 0,
            error: None,
        };
        app.request_page();
        app
    }

    fn width(&self) -> u16 {
        match self.terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        }
    }

    fn view(&self) -> TableView<String> {
        self.table
            .view(window_variant(self.width(), self.narrow_width))
    }

    /// Focused column if it is still shown, else the first column.
    fn focused_column(&self, view: &TableView<String>) -> Option<ColumnId> {
        self.focused
            .as_ref()
            .filter(|id| view.headers.iter().any(|h| h.column() == *id))
            .or_else(|| view.headers.first().map(|h| h.column()))
            .cloned()
    }

    /// Issue a query for the current page and mark the table loading.
    fn request_page(&mut self) {
        let query = self.fetch.next_query();
        debug!(
            request = query.request_id,
            page = query.page_index,
            page_size = query.page_size,
            "Requesting page"
        );
        match self.fetcher.request(query) {
            Ok(()) => {
                self.table.set_loading(true);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "Page request failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Drain the table's intents; refetch when any of them asks for it.
    fn sync_events(&mut self) {
        let events = self.table.drain_events();
        if events.is_empty() {
            return;
        }
        debug!(count = events.len(), "Drained table events");
        if self.fetch.apply_events(&events) {
            self.cursor = 0;
            self.request_page();
        }
    }

    /// Apply every response that arrived. Returns true if the table changed.
    fn poll_fetch(&mut self) -> bool {
        let mut applied = false;
        while let Some(response) = self.fetcher.try_recv() {
            let Some(input) = self.fetch.accept(response) else {
                continue;
            };
            // page past the end of the data; the controller has clamped it
            let refetch = input.rows.is_empty() && input.paging.total() > 0;
            self.table.set_input(input);
            applied = true;
            if refetch {
                self.request_page();
            }
        }
        if applied {
            let rows = self.view().rows().len();
            self.cursor = self.cursor.min(rows.saturating_sub(1));
        }
        applied
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            info!("Quit requested");
            return true;
        }

        let view = self.view();
        let last_row = view.rows().len().saturating_sub(1);
        match action {
            KeyAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::CursorDown => self.cursor = (self.cursor + 1).min(last_row),
            KeyAction::CursorTop => self.cursor = 0,
            KeyAction::CursorBottom => self.cursor = last_row,
            KeyAction::FocusNextColumn => self.move_focus(&view, true),
            KeyAction::FocusPrevColumn => self.move_focus(&view, false),
            KeyAction::ScrollLeft => self.scroll_x = self.scroll_x.saturating_sub(SCROLL_STEP),
            KeyAction::ScrollRight => {
                let max = column_geometry(&view, self.width(), 0).max_scroll();
                self.scroll_x = self.scroll_x.saturating_add(SCROLL_STEP).min(max);
            }
            KeyAction::ResetSorting => self.reset.reset_sorting(),
            KeyAction::ResetSelected => self.reset.reset_selected(),
            KeyAction::Refresh => self.request_page(),
            other => {
                if let Some(command) = self.table_action(other, &view) {
                    debug!(?command, "Dispatching table action");
                    self.table.dispatch(command);
                }
            }
        }

        self.sync_events();
        false
    }

    /// Handle a mouse event
    ///
    /// Pressing on the last cell of a header starts a resize drag; pressing
    /// elsewhere on a header focuses that column. The wheel moves the cursor.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.table.dispatch(TableAction::DragResize {
                    pointer_x: i32::from(mouse.column),
                });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.table.dispatch(TableAction::EndResize);
            }
            MouseEventKind::ScrollUp => self.cursor = self.cursor.saturating_sub(1),
            MouseEventKind::ScrollDown => {
                let last_row = self.view().rows().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last_row);
            }
            _ => {}
        }
        self.sync_events();
    }

    fn press(&mut self, x: u16, y: u16) {
        // header is the first line of the screen
        if y != 0 {
            return;
        }
        let view = self.view();
        let geometry = column_geometry(&view, self.width(), self.scroll_x);
        let Some(span) = geometry
            .spans
            .iter()
            .find(|span| x >= span.x && x - span.x < span.width)
        else {
            return;
        };
        let header = &view.headers[span.header];
        let column = header.column().clone();
        let at_right_edge = x == span.x + span.width - 1
            && u32::from(span.skip) + u32::from(span.width) == header.placement.width;

        if at_right_edge && !view.is_resizing {
            self.table.dispatch(TableAction::StartResize {
                column,
                pointer_x: i32::from(x),
            });
        } else {
            self.focused = Some(column);
        }
    }

    fn move_focus(&mut self, view: &TableView<String>, forward: bool) {
        let Some(last) = view.headers.len().checked_sub(1) else {
            return;
        };
        let current = self
            .focused_column(view)
            .and_then(|id| view.headers.iter().position(|h| h.column() == &id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1).min(last)
        } else {
            current.saturating_sub(1)
        };
        let column = view.headers[next].column().clone();
        self.scroll_x = reveal_column(view, self.width(), &column, self.scroll_x);
        self.focused = Some(column);
    }

    /// Table command for a key action aimed at the focused column or row.
    fn table_action(&self, action: KeyAction, view: &TableView<String>) -> Option<TableAction> {
        let column = || self.focused_column(view);
        let row = || view.rows().get(self.cursor).map(|r| r.id.clone());
        let pin = |side| {
            column().map(|column| TableAction::Pin { column, side })
        };

        match action {
            KeyAction::ToggleSort => column().map(TableAction::ToggleSort),
            KeyAction::PinLeft => pin(Some(PinSide::Left)),
            KeyAction::PinRight => pin(Some(PinSide::Right)),
            KeyAction::Unpin => pin(None),
            KeyAction::WidenColumn | KeyAction::NarrowColumn => {
                let column = column()?;
                let current = view
                    .headers
                    .iter()
                    .find(|h| h.column() == &column)?
                    .placement
                    .width;
                let width = if action == KeyAction::WidenColumn {
                    current.saturating_add(RESIZE_STEP)
                } else {
                    current.saturating_sub(RESIZE_STEP)
                };
                Some(TableAction::ResizeColumn { column, width })
            }
            KeyAction::ToggleRow => row().map(TableAction::ToggleRow),
            KeyAction::ToggleAllRows => Some(TableAction::ToggleAllRows),
            KeyAction::ToggleExpand => row().map(TableAction::ToggleExpanded),
            KeyAction::NextPage => Some(TableAction::NextPage),
            KeyAction::PrevPage => Some(TableAction::PreviousPage),
            KeyAction::FirstPage => Some(TableAction::GoToPage(1)),
            KeyAction::LastPage => view
                .pagination
                .as_ref()
                .map(|p| TableAction::GoToPage(p.total_pages)),
            KeyAction::CyclePageSize => {
                let (options, current) = self.table.with_state(|state| {
                    (
                        state.options().page_size_options.clone(),
                        state.paging().page_size(),
                    )
                });
                next_page_size(&options, current).map(TableAction::SetPageSize)
            }
            _ => None,
        }
    }

    /// Render the UI
    fn draw(&mut self) -> Result<(), TuiError> {
        let width = self.width();
        let view = self.view();
        self.scroll_x = self
            .scroll_x
            .min(column_geometry(&view, width, 0).max_scroll());

        let focused = self.focused_column(&view);
        let cursor = (!view.rows().is_empty()).then_some(self.cursor);
        let (selected, sort) = self
            .table
            .with_state(|state| (state.selection().len(), state.sort().cloned()));
        let fetching = self.fetch.is_pending();
        let scroll_x = self.scroll_x;
        let styles = &self.styles;
        let source = self.source_label.as_str();
        let error = self.error.as_deref();

        self.terminal.draw(|frame| {
            let areas = split_screen(frame.area());
            frame.render_widget(
                TableWidget::new(&view, styles)
                    .cursor(cursor)
                    .focused(focused.as_ref())
                    .scroll_x(scroll_x),
                areas.table,
            );
            frame.render_widget(
                PaginationBar::new(view.pagination.as_ref(), styles),
                areas.pagination,
            );
            frame.render_widget(
                StatusBar {
                    source,
                    sort: sort.as_ref(),
                    selected,
                    fetching,
                    error,
                    styles,
                },
                areas.status,
            );
        })?;
        Ok(())
    }
}

/// The option after `current`, wrapping to the first.
fn next_page_size(options: &[usize], current: usize) -> Option<usize> {
    options
        .iter()
        .copied()
        .find(|size| *size > current)
        .or_else(|| options.first().copied())
        .filter(|size| *size != current)
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization; the first page is requested as in
    /// production.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        table: TableInstance<Record>,
        fetcher: Fetcher,
        fetch: FetchController,
        key_bindings: KeyBindings,
        args: CliArgs,
    ) -> Self {
        Self::with_terminal(terminal, table, fetcher, fetch, key_bindings, args)
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Apply arrived fetch results (test-only accessor)
    pub(crate) fn poll_fetch_test(&mut self) -> bool {
        self.poll_fetch()
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The live table (test-only accessor)
    pub(crate) fn table(&self) -> &TableInstance<Record> {
        &self.table
    }

    pub(crate) fn fetch_controller(&self) -> &FetchController {
        &self.fetch
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    pub(crate) fn focused(&self) -> Option<ColumnId> {
        self.focused_column(&self.view())
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    pub fn new_for_bench(
        terminal: Terminal<B>,
        table: TableInstance<Record>,
        fetcher: Fetcher,
        fetch: FetchController,
        args: CliArgs,
    ) -> Self {
        Self::new_for_test(terminal, table, fetcher, fetch, KeyBindings::default(), args)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Apply arrived fetch results (benchmark-only accessor)
    pub fn poll_fetch_bench(&mut self) -> bool {
        self.poll_fetch_test()
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Build the table for `source` and mount it with its first page requested.
///
/// Columns come from the config, or from the first record when the config
/// names none.
pub fn mount_table(
    source: &JsonlSource,
    config: &ResolvedConfig,
    source_label: &str,
) -> (TableInstance<Record>, FetchController) {
    let names = if config.columns.is_empty() {
        source.field_names()
    } else {
        config.columns.clone()
    };
    let columns = integration::build_columns(&names, config.column_width);
    let options =
        integration::build_options(config, format!("{} has no records", source_label));
    let table = TableInstance::new(columns, options);
    table.set_input(integration::initial_input(config.page_size));

    let sort = table.with_state(|state| state.sort().cloned());
    (table, FetchController::new(config.page_size, sort))
}

/// Initialize and run the TUI application over a loaded source
///
/// Handles terminal setup, runs the event loop on this thread and the
/// source on a worker thread, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    source: JsonlSource,
    config: &ResolvedConfig,
    args: CliArgs,
) -> Result<(), TuiError> {
    let (table, fetch) = mount_table(&source, config, &args.source_label);
    info!(
        records = source.records().len(),
        skipped = source.skipped(),
        columns = table.with_state(|state| state.columns().len()),
        "Mounting table"
    );

    let worker = SourceWorker::spawn(source, Duration::from_millis(config.latency_ms))?;
    let mut app = TuiApp::new(table, Fetcher::Worker(worker), fetch, args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
