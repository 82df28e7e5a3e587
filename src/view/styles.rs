//! Table styling configuration.
//!
//! Provides the styles the table widget and pagination bar draw with, and
//! collapses them to plain text when colours are disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for every part of the table screen.
///
/// Modifiers (bold, reversed, dim) survive `NO_COLOR`; only colours are
/// dropped, so the cursor and overlay stay visible on a monochrome terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column headers.
    pub header: Style,
    /// Header of the column the rows are sorted by.
    pub sorted_header: Style,
    /// Header of the focused column.
    pub focused_header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Row whose checkbox is checked.
    pub selected_row: Style,
    /// Enabled checkboxes.
    pub checkbox: Style,
    /// Checkboxes of rows that cannot be selected.
    pub disabled_checkbox: Style,
    /// Separator between pinned and scrolled columns.
    pub pin_boundary: Style,
    /// Skeleton placeholders.
    pub skeleton: Style,
    /// Empty-state message.
    pub empty: Style,
    /// Applied over stale rows while a refetch runs.
    pub overlay: Style,
    /// Loading label over stale rows.
    pub overlay_label: Style,
    /// Sub-component lines of expanded rows.
    pub expanded: Style,
    /// Page buttons.
    pub page: Style,
    /// Button of the current page.
    pub current_page: Style,
    /// Previous and next buttons that cannot move.
    pub disabled_nav: Style,
    /// Status bar.
    pub status: Style,
    /// Errors in the status bar.
    pub error: Style,
}

impl TableStyles {
    /// Create styles with the default scheme, honouring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let plain = Style::default();
        let bold = plain.add_modifier(Modifier::BOLD);
        let dim = plain.add_modifier(Modifier::DIM);
        let reversed = plain.add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                sorted_header: bold.fg(Color::Yellow),
                focused_header: reversed.add_modifier(Modifier::BOLD),
                cursor_row: plain.bg(Color::DarkGray),
                selected_row: plain.fg(Color::Green),
                checkbox: plain.fg(Color::Green),
                disabled_checkbox: dim,
                pin_boundary: plain.fg(Color::DarkGray),
                skeleton: plain.fg(Color::DarkGray),
                empty: dim.add_modifier(Modifier::ITALIC),
                overlay: dim,
                overlay_label: bold.fg(Color::Yellow),
                expanded: plain.fg(Color::Gray),
                page: plain,
                current_page: bold.fg(Color::Black).bg(Color::Cyan),
                disabled_nav: dim,
                status: plain.fg(Color::Gray),
                error: bold.fg(Color::Red),
            }
        } else {
            Self {
                header: bold,
                sorted_header: bold.add_modifier(Modifier::UNDERLINED),
                focused_header: reversed.add_modifier(Modifier::BOLD),
                cursor_row: reversed,
                selected_row: bold,
                checkbox: plain,
                disabled_checkbox: dim,
                pin_boundary: plain,
                skeleton: dim,
                empty: dim,
                overlay: dim,
                overlay_label: bold,
                expanded: plain,
                page: plain,
                current_page: reversed,
                disabled_nav: dim,
                status: plain,
                error: bold,
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
