//! Host-level keyboard actions independent of key bindings.

/// Actions the terminal host can perform, mapped from keys by
/// [`crate::config::KeyBindings`].
///
/// These represent user intent, not specific keys. Most of them become a
/// [`crate::model::TableAction`] aimed at the focused row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Jump to the first row of the page. Default: g
    CursorTop,
    /// Jump to the last row of the page. Default: G
    CursorBottom,

    // Column focus
    /// Focus the next column in render order. Default: l/→
    FocusNextColumn,
    /// Focus the previous column in render order. Default: h/←
    FocusPrevColumn,
    /// Scroll unpinned columns left. Default: <
    ScrollLeft,
    /// Scroll unpinned columns right. Default: >
    ScrollRight,

    // Column commands
    /// Cycle the sort of the focused column. Default: s
    ToggleSort,
    /// Clear the sort through the reset handle. Default: S
    ResetSorting,
    /// Pin the focused column left. Default: [
    PinLeft,
    /// Pin the focused column right. Default: ]
    PinRight,
    /// Unpin the focused column. Default: u
    Unpin,
    /// Widen the focused column. Default: +
    WidenColumn,
    /// Narrow the focused column. Default: -
    NarrowColumn,

    // Rows
    /// Toggle the checkbox of the row under the cursor. Default: Space
    ToggleRow,
    /// Toggle the header checkbox. Default: a
    ToggleAllRows,
    /// Clear the selection through the reset handle. Default: x
    ResetSelected,
    /// Show or hide the row's detail sub-row. Default: Enter
    ToggleExpand,

    // Paging
    /// Next page. Default: n/PageDown
    NextPage,
    /// Previous page. Default: p/PageUp
    PrevPage,
    /// First page. Default: Home
    FirstPage,
    /// Last page. Default: End
    LastPage,
    /// Switch to the next configured page size. Default: z
    CyclePageSize,

    // Application
    /// Refetch the current page. Default: r
    Refresh,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
