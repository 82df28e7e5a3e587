//! Table state: the single source of truth every transition reads and returns.
//!
//! `TableState` owns the column definitions, the caller's current page of
//! rows, and the four interaction facets (sort, pinning/sizing, selection,
//! expansion). Transitions live in the sibling `*_handler` modules as pure
//! functions `fn(TableState, ..) -> TableState`.

use crate::model::{
    assign_row_ids, Column, ColumnId, PagingData, PagingInput, RowId, SortState, TableEvent,
    TableRow, DEFAULT_PAGE_SIZE_OPTIONS,
};
use crate::state::pinning_handler::ColumnPinning;
use crate::state::resize_handler::{ColumnSizing, ResizeDrag};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Predicate over one row.
pub type RowPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Predicate over the selectable rows of the current page.
pub type RowsPredicate<T> = Arc<dyn Fn(&[T]) -> bool + Send + Sync>;

/// Renders the expanded sub-row of a row.
pub type SubComponent<T, O> = Arc<dyn Fn(&T) -> O + Send + Sync>;

/// Caller configuration fixed at table construction.
pub struct TableOptions<T, O = String> {
    /// Page sizes the owner offers; `set_page_size` only accepts these.
    pub page_size_options: Vec<usize>,
    /// Initial pinning; unknown and non-pinnable ids are dropped.
    pub pinned_columns: ColumnPinning,
    /// Initial sort; ignored when the column is unknown or not sortable.
    pub initial_sort: Option<SortState>,
    /// Whether rows carry checkboxes at all.
    pub selectable: bool,
    /// Whether column widths may change.
    pub resizable: bool,
    /// Columns whose loading skeleton shows an avatar next to the bar.
    pub skeleton_avatar_columns: HashSet<ColumnId>,
    /// Custom content for the empty state.
    pub empty_state: Option<O>,
    /// Overrides the displayed checked state of a row.
    pub checkbox_checked: Option<RowPredicate<T>>,
    /// Overrides the displayed checked state of the header checkbox.
    pub indeterminate_checkbox_checked: Option<RowsPredicate<T>>,
    /// Rows rejected here cannot be toggled.
    pub row_selectable: Option<RowPredicate<T>>,
    /// Rows rejected here cannot be expanded.
    pub row_expandable: Option<RowPredicate<T>>,
    /// Content rendered beneath an expanded row.
    pub sub_component: Option<SubComponent<T, O>>,
}

impl<T, O> Default for TableOptions<T, O> {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            pinned_columns: ColumnPinning::default(),
            initial_sort: None,
            selectable: true,
            resizable: false,
            skeleton_avatar_columns: HashSet::new(),
            empty_state: None,
            checkbox_checked: None,
            indeterminate_checkbox_checked: None,
            row_selectable: None,
            row_expandable: None,
            sub_component: None,
        }
    }
}

impl<T, O> TableOptions<T, O> {
    /// Page sizes offered by the page-size control.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Columns pinned when the table mounts.
    pub fn with_pinned_columns(mut self, pinning: ColumnPinning) -> Self {
        self.pinned_columns = pinning;
        self
    }

    /// Sort active when the table mounts. No event is emitted for it.
    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Show row and header checkboxes.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Accept resize commands.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Columns whose skeleton placeholder has an avatar.
    pub fn with_skeleton_avatar_columns(
        mut self,
        columns: impl IntoIterator<Item = ColumnId>,
    ) -> Self {
        self.skeleton_avatar_columns = columns.into_iter().collect();
        self
    }

    /// Content shown instead of the default empty message.
    pub fn with_empty_state(mut self, content: O) -> Self {
        self.empty_state = Some(content);
        self
    }

    /// Decide a row's checked state instead of the selection.
    ///
    /// Must not panic; see [`crate::state::TableInstance`].
    pub fn with_checkbox_checked(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.checkbox_checked = Some(Arc::new(f));
        self
    }

    /// Decide whether the header shows as indeterminate for the page rows.
    ///
    /// Must not panic.
    pub fn with_indeterminate_checkbox_checked(
        mut self,
        f: impl Fn(&[T]) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.indeterminate_checkbox_checked = Some(Arc::new(f));
        self
    }

    /// Rows rejected here keep a disabled checkbox.
    ///
    /// Must not panic.
    pub fn with_row_selectable(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.row_selectable = Some(Arc::new(f));
        self
    }

    /// Rows rejected here cannot be expanded.
    ///
    /// Must not panic.
    pub fn with_row_expandable(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.row_expandable = Some(Arc::new(f));
        self
    }

    /// Content drawn under an expanded row.
    ///
    /// Must not panic.
    pub fn with_sub_component(mut self, f: impl Fn(&T) -> O + Send + Sync + 'static) -> Self {
        self.sub_component = Some(Arc::new(f));
        self
    }
}

impl<T, O: Clone> Clone for TableOptions<T, O> {
    fn clone(&self) -> Self {
        Self {
            page_size_options: self.page_size_options.clone(),
            pinned_columns: self.pinned_columns.clone(),
            initial_sort: self.initial_sort.clone(),
            selectable: self.selectable,
            resizable: self.resizable,
            skeleton_avatar_columns: self.skeleton_avatar_columns.clone(),
            empty_state: self.empty_state.clone(),
            checkbox_checked: self.checkbox_checked.clone(),
            indeterminate_checkbox_checked: self.indeterminate_checkbox_checked.clone(),
            row_selectable: self.row_selectable.clone(),
            row_expandable: self.row_expandable.clone(),
            sub_component: self.sub_component.clone(),
        }
    }
}

impl<T, O: fmt::Debug> fmt::Debug for TableOptions<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("page_size_options", &self.page_size_options)
            .field("pinned_columns", &self.pinned_columns)
            .field("initial_sort", &self.initial_sort)
            .field("selectable", &self.selectable)
            .field("resizable", &self.resizable)
            .field("skeleton_avatar_columns", &self.skeleton_avatar_columns)
            .field("empty_state", &self.empty_state)
            .field("checkbox_checked", &self.checkbox_checked.is_some())
            .field(
                "indeterminate_checkbox_checked",
                &self.indeterminate_checkbox_checked.is_some(),
            )
            .field("row_selectable", &self.row_selectable.is_some())
            .field("row_expandable", &self.row_expandable.is_some())
            .field("sub_component", &self.sub_component.is_some())
            .finish()
    }
}

/// One fetch result handed to the engine by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInput<T> {
    /// The current page of rows, already sorted server-side.
    pub rows: Vec<T>,
    /// Paging metadata of the fetch.
    pub paging: PagingData,
    /// A fetch is in flight.
    pub loading: bool,
    /// The fetch completed with nothing to show.
    pub no_data: bool,
}

impl<T> TableInput<T> {
    /// A completed fetch: not loading, not empty.
    pub fn new(rows: Vec<T>, paging: PagingData) -> Self {
        Self {
            rows,
            paging,
            loading: false,
            no_data: false,
        }
    }

    /// Build from unvalidated paging metadata, sanitizing it.
    pub fn from_raw(rows: Vec<T>, paging: PagingInput) -> Self {
        Self::new(rows, PagingData::from_input(paging))
    }

    /// Mark a fetch as in flight.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Mark the fetch as having nothing to show.
    pub fn with_no_data(mut self, no_data: bool) -> Self {
        self.no_data = no_data;
        self
    }
}

/// Complete state of one table instance.
pub struct TableState<T, O = String> {
    pub(crate) columns: Vec<Column<T, O>>,
    pub(crate) options: TableOptions<T, O>,
    pub(crate) rows: Vec<T>,
    pub(crate) row_ids: Vec<RowId>,
    pub(crate) paging: PagingData,
    pub(crate) loading: bool,
    pub(crate) no_data: bool,
    pub(crate) sort: Option<SortState>,
    pub(crate) pinning: ColumnPinning,
    pub(crate) sizing: ColumnSizing,
    pub(crate) selection: HashSet<RowId>,
    pub(crate) expanded: HashSet<RowId>,
    pub(crate) resize_drag: Option<ResizeDrag>,
    events: VecDeque<TableEvent<T>>,
}

impl<T, O> Default for TableState<T, O> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            options: TableOptions::default(),
            rows: Vec::new(),
            row_ids: Vec::new(),
            paging: PagingData::default(),
            loading: false,
            no_data: false,
            sort: None,
            pinning: ColumnPinning::default(),
            sizing: ColumnSizing::default(),
            selection: HashSet::new(),
            expanded: HashSet::new(),
            resize_drag: None,
            events: VecDeque::new(),
        }
    }
}

impl<T, O> TableState<T, O> {
    /// Create a table from column definitions and options.
    ///
    /// Duplicate column ids are dropped (first wins). Initial pinning and
    /// sort are filtered against the surviving columns.
    pub fn new(columns: Vec<Column<T, O>>, options: TableOptions<T, O>) -> Self {
        let mut seen = HashSet::new();
        let columns: Vec<Column<T, O>> = columns
            .into_iter()
            .filter(|column| {
                let fresh = seen.insert(column.id().clone());
                if !fresh {
                    warn!(column = %column.id(), "Duplicate column id dropped");
                }
                fresh
            })
            .collect();

        let pinning = options.pinned_columns.normalized(&columns);
        let sizing = ColumnSizing::from_columns(&columns);
        let sort = options.initial_sort.clone().filter(|sort| {
            let valid = columns
                .iter()
                .any(|c| c.id() == &sort.column && c.is_sortable());
            if !valid {
                warn!(column = %sort.column, "Initial sort on unknown or unsortable column ignored");
            }
            valid
        });

        debug!(
            columns = columns.len(),
            left = pinning.left().len(),
            right = pinning.right().len(),
            "Table created"
        );

        Self {
            columns,
            options,
            pinning,
            sizing,
            sort,
            ..Self::default()
        }
    }

    /// Column definitions in definition order.
    pub fn columns(&self) -> &[Column<T, O>] {
        &self.columns
    }

    /// Column with this id.
    pub fn column(&self, id: &ColumnId) -> Option<&Column<T, O>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Options the table was mounted with.
    pub fn options(&self) -> &TableOptions<T, O> {
        &self.options
    }

    /// Paging of the current page, including optimistic page changes.
    pub fn paging(&self) -> PagingData {
        self.paging
    }

    /// A fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last fetch had nothing to show.
    pub fn is_no_data(&self) -> bool {
        self.no_data
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Pinned columns per edge.
    pub fn pinning(&self) -> &ColumnPinning {
        &self.pinning
    }

    /// Tracked column widths.
    pub fn sizing(&self) -> &ColumnSizing {
        &self.sizing
    }

    /// Selected rows of the current page.
    pub fn selection(&self) -> &HashSet<RowId> {
        &self.selection
    }

    /// Expanded rows of the current page.
    pub fn expanded(&self) -> &HashSet<RowId> {
        &self.expanded
    }

    /// A resize drag is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resize_drag.is_some()
    }

    /// Tracked width of a column.
    pub fn column_width(&self, id: &ColumnId) -> Option<u32> {
        self.column(id).map(|c| self.sizing.width_of(c))
    }

    /// Rows and ids on the current page, capped at `page_size`.
    pub fn page_rows(&self) -> impl Iterator<Item = (&RowId, &T)> {
        self.row_ids
            .iter()
            .zip(self.rows.iter())
            .take(self.paging.page_size())
    }

    /// Look up a row on the current page by id.
    pub fn page_row(&self, id: &RowId) -> Option<&T> {
        self.page_rows()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }

    /// Checkbox interaction is blocked while loading or showing the empty state.
    pub fn interaction_locked(&self) -> bool {
        self.loading || self.no_data
    }

    /// Whether the user may toggle this row right now.
    pub fn is_row_selectable(&self, row: &T) -> bool {
        self.options.selectable
            && !self.interaction_locked()
            && self.options.row_selectable.as_ref().is_none_or(|f| f(row))
    }

    /// Whether this row can show its sub-component.
    pub fn is_row_expandable(&self, row: &T) -> bool {
        self.options.sub_component.is_some()
            && self.options.row_expandable.as_ref().is_none_or(|f| f(row))
    }

    /// Displayed checked state of a row; the caller override wins when set.
    pub fn row_checked(&self, id: &RowId, row: &T) -> bool {
        match &self.options.checkbox_checked {
            Some(f) => f(row),
            None => self.selection.contains(id),
        }
    }

    /// Displayed checked state of the header checkbox.
    ///
    /// The caller override, when set, receives the selectable page rows.
    /// Otherwise the header is checked when every selectable row is.
    pub fn all_rows_checked(&self) -> bool
    where
        T: Clone,
    {
        let selectable: Vec<(&RowId, &T)> = self.selectable_page_rows().collect();
        match &self.options.indeterminate_checkbox_checked {
            Some(f) => {
                let rows: Vec<T> = selectable.iter().map(|(_, row)| (*row).clone()).collect();
                f(&rows)
            }
            None => {
                !selectable.is_empty()
                    && selectable.iter().all(|(id, row)| self.row_checked(id, row))
            }
        }
    }

    /// Whether any selectable page row is displayed as checked.
    pub fn any_row_checked(&self) -> bool {
        self.selectable_page_rows()
            .any(|(id, row)| self.row_checked(id, row))
    }

    /// Page rows that pass the caller's `row_selectable` predicate.
    ///
    /// Independent of loading state, so the header keeps its checked look
    /// while interaction is locked.
    pub fn selectable_page_rows(&self) -> impl Iterator<Item = (&RowId, &T)> {
        self.page_rows().filter(|(_, row)| {
            self.options
                .row_selectable
                .as_ref()
                .is_none_or(|f| f(row))
        })
    }

    /// Queue an event for the owner.
    pub(crate) fn push_event(&mut self, event: TableEvent<T>) {
        self.events.push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent<T>> {
        self.events.drain(..).collect()
    }

    /// Number of queued events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Update the in-flight flag without replacing rows.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

impl<T: TableRow, O> TableState<T, O> {
    /// Accept a new fetch result.
    ///
    /// A result for a different page index or page size clears selection
    /// and expansion outright: index-derived row ids repeat on every page.
    /// A refetch of the same page only prunes entries whose rows are gone.
    pub fn set_input(&mut self, input: TableInput<T>) {
        let page_changed = input.paging.page_index() != self.paging.page_index()
            || input.paging.page_size() != self.paging.page_size();

        self.row_ids = assign_row_ids(&input.rows);
        self.rows = input.rows;
        self.paging = input.paging;
        self.loading = input.loading;
        self.no_data = input.no_data;

        let before = (self.selection.len(), self.expanded.len());
        if page_changed {
            self.selection.clear();
            self.expanded.clear();
        } else {
            let on_page: HashSet<RowId> = self.page_rows().map(|(id, _)| id.clone()).collect();
            self.selection.retain(|id| on_page.contains(id));
            self.expanded.retain(|id| on_page.contains(id));
        }
        let pruned =
            (before.0 - self.selection.len()) + (before.1 - self.expanded.len());

        debug!(
            rows = self.rows.len(),
            total = self.paging.total(),
            page = self.paging.page_index(),
            loading = self.loading,
            no_data = self.no_data,
            page_changed,
            pruned,
            "Table input applied"
        );
    }
}

impl<T, O> fmt::Debug for TableState<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("row_ids", &self.row_ids)
            .field("paging", &self.paging)
            .field("loading", &self.loading)
            .field("no_data", &self.no_data)
            .field("sort", &self.sort)
            .field("pinning", &self.pinning)
            .field("sizing", &self.sizing)
            .field("selection", &self.selection)
            .field("expanded", &self.expanded)
            .field("resize_drag", &self.resize_drag)
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod tests;
