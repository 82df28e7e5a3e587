//! Layout dimension constants and glyphs for TUI rendering.
//!
//! Centralized location for the numeric values and symbols the table widget
//! and pagination bar share.

/// Height of the column header in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for sort/selection summary and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the checkbox column, including its trailing space.
pub const CHECKBOX_COLUMN_WIDTH: u16 = 4;

/// Width of the separator drawn at a pinned boundary.
pub const PIN_SEPARATOR_WIDTH: u16 = 1;

/// Cells the centre columns move per scroll step.
pub const SCROLL_STEP: u16 = 4;

/// Cells a column grows or shrinks per resize step.
pub const RESIZE_STEP: u32 = 2;

/// Drawn at a pinned boundary.
pub const PIN_SEPARATOR: &str = "│";
/// Header marker for ascending sort.
pub const SORT_ASC_GLYPH: &str = "▲";
/// Header marker for descending sort.
pub const SORT_DESC_GLYPH: &str = "▼";
/// Fill of a skeleton bar.
pub const SKELETON_GLYPH: char = '▒';
/// Avatar placeholder in a skeleton cell.
pub const SKELETON_AVATAR: &str = "● ";
/// Marks truncated text and page gaps.
pub const ELLIPSIS: &str = "…";
/// Previous-page button.
pub const PREVIOUS_GLYPH: &str = "‹";
/// Next-page button.
pub const NEXT_GLYPH: &str = "›";
/// Label drawn over stale rows during a refetch.
pub const LOADING_LABEL: &str = " Loading… ";
/// Shown when there is nothing to show and no custom empty state.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data";
