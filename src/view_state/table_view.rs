//! Derived view model of a whole table.
//!
//! `derive_view` is a pure function of `TableState`. Hosts draw the result;
//! they never read the state directly.
//!
//! Body precedence:
//! 1. loading with no rows → skeleton placeholders, one per page slot
//! 2. `no_data` → empty state (custom content or the default)
//! 3. otherwise the populated page, with an overlay while a refetch runs

use crate::model::{ColumnId, RowId, SortDirection, TableRow};
use crate::state::TableState;
use crate::view_state::checkbox::{header_checkbox, row_checkbox, CheckboxView};
use crate::view_state::page_window::WindowVariant;
use crate::view_state::pagination::PaginationView;
use crate::view_state::sticky::{layout_columns, ColumnPlacement};

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Position, width and pin of the column.
    pub placement: ColumnPlacement,
    /// Header text.
    pub label: String,
    /// Sort commands apply.
    pub sortable: bool,
    /// Pin commands apply.
    pub pinnable: bool,
    /// Active sort direction on this column.
    pub sort: Option<SortDirection>,
}

impl HeaderCell {
    /// Id of the column.
    pub fn column(&self) -> &ColumnId {
        &self.placement.column
    }
}

/// One rendered page row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<O> {
    /// Row identity on this page.
    pub id: RowId,
    /// `None` when the table is not selectable.
    pub checkbox: Option<CheckboxView>,
    /// Rendered cells, aligned with `TableView::headers`.
    pub cells: Vec<O>,
    /// The row can be expanded.
    pub expandable: bool,
    /// Sub-component output when the row is expanded.
    pub expanded: Option<O>,
}

/// Placeholder shape of one skeleton cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonCell {
    /// A plain bar.
    Bar,
    /// An avatar followed by a bar.
    AvatarWithText,
}

/// Placeholder row shown while the first page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonRow {
    /// One placeholder per column.
    pub cells: Vec<SkeletonCell>,
}

/// What to show when there is nothing to show.
#[derive(Debug, Clone, PartialEq)]
pub enum EmptyState<O> {
    /// The built-in message.
    Default,
    /// Caller-supplied content.
    Custom(O),
}

/// Body of the table for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<O> {
    /// Loading with no rows yet.
    Skeleton(Vec<SkeletonRow>),
    /// Nothing to show.
    Empty(EmptyState<O>),
    /// The current page.
    Populated {
        /// Rows of the page.
        rows: Vec<RowView<O>>,
        /// Rows are stale; a refetch is in flight.
        overlay: bool,
    },
}

/// Everything needed to draw a table for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<O> {
    /// Select-all checkbox; `None` when not selectable.
    pub header_checkbox: Option<CheckboxView>,
    /// Headers in draw order.
    pub headers: Vec<HeaderCell>,
    /// Rows, skeleton or empty state.
    pub body: TableBody<O>,
    /// `None` when the dataset has no pages.
    pub pagination: Option<PaginationView>,
    /// A resize drag is in progress.
    pub is_resizing: bool,
}

impl<O> TableView<O> {
    /// Rows of a populated body; empty otherwise.
    pub fn rows(&self) -> &[RowView<O>] {
        match &self.body {
            TableBody::Populated { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Body is the loading skeleton.
    pub fn is_skeleton(&self) -> bool {
        matches!(self.body, TableBody::Skeleton(_))
    }

    /// Body is the empty state.
    pub fn is_empty_state(&self) -> bool {
        matches!(self.body, TableBody::Empty(_))
    }

    /// Rows are stale while a refetch runs.
    pub fn has_overlay(&self) -> bool {
        matches!(self.body, TableBody::Populated { overlay: true, .. })
    }
}

/// Derive the view model for the current state.
pub fn derive_view<T: TableRow, O: Clone>(
    state: &TableState<T, O>,
    variant: WindowVariant,
) -> TableView<O> {
    let placements = layout_columns(state);
    let sort = state.sort();

    let headers: Vec<HeaderCell> = placements
        .into_iter()
        .filter_map(|placement| {
            let column = state.column(&placement.column)?;
            Some(HeaderCell {
                label: column.header().to_string(),
                sortable: column.is_sortable(),
                pinnable: column.is_pinnable(),
                sort: sort
                    .filter(|s| &s.column == column.id())
                    .map(|s| s.direction),
                placement,
            })
        })
        .collect();

    let has_rows = state.page_rows().next().is_some();
    let body = if state.is_loading() && !has_rows {
        skeleton_body(state, &headers)
    } else if state.is_no_data() {
        TableBody::Empty(
            state
                .options()
                .empty_state
                .clone()
                .map_or(EmptyState::Default, EmptyState::Custom),
        )
    } else {
        TableBody::Populated {
            rows: populated_rows(state, &headers),
            overlay: state.is_loading(),
        }
    };

    TableView {
        header_checkbox: header_checkbox(state),
        headers,
        body,
        pagination: PaginationView::derive(
            state.paging(),
            &state.options().page_size_options,
            variant,
        ),
        is_resizing: state.is_resizing(),
    }
}

fn skeleton_body<T, O>(state: &TableState<T, O>, headers: &[HeaderCell]) -> TableBody<O> {
    let avatars = &state.options().skeleton_avatar_columns;
    let row = SkeletonRow {
        cells: headers
            .iter()
            .map(|h| {
                if avatars.contains(h.column()) {
                    SkeletonCell::AvatarWithText
                } else {
                    SkeletonCell::Bar
                }
            })
            .collect(),
    };
    TableBody::Skeleton(vec![row; state.paging().page_size()])
}

fn populated_rows<T: TableRow, O: Clone>(
    state: &TableState<T, O>,
    headers: &[HeaderCell],
) -> Vec<RowView<O>> {
    state
        .page_rows()
        .map(|(id, row)| {
            let cells = headers
                .iter()
                .filter_map(|h| {
                    let column = state.column(h.column())?;
                    Some(column.render(&row.cell_value(column.id()), row))
                })
                .collect();
            let expandable = state.is_row_expandable(row);
            let expanded = if expandable && state.expanded().contains(id) {
                state.options().sub_component.as_ref().map(|f| f(row))
            } else {
                None
            };
            RowView {
                id: id.clone(),
                checkbox: row_checkbox(state, id, row),
                cells,
                expandable,
                expanded,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "table_view_tests.rs"]
mod tests;
