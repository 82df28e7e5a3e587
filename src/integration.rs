//! Pure core integration functions.
//!
//! Glue between the table engine and a record source, testable without
//! threads or a terminal:
//! - `process_lines` turns numbered JSONL lines into records
//! - `build_columns` / `build_options` turn the resolved config into the
//!   table definition the host mounts
//! - `FetchController` turns drained table events into page queries and
//!   page responses back into table input, dropping stale responses

use crate::config::ResolvedConfig;
use crate::model::{
    Column, ColumnId, PagingData, RecordError, SortDirection, SortOrder, SortState, TableEvent,
};
use crate::source::record::{parse_record, Record};
use crate::source::{PageQuery, PageResponse};
use crate::state::{ColumnPinning, TableInput, TableOptions};
use tracing::{debug, info, warn};

/// Narrowest a host column can be dragged or keyed down to, in cells.
pub const MIN_COLUMN_WIDTH: u32 = 4;

/// Parse numbered JSONL lines into records.
///
/// # Returns
///
/// Tuple of (successfully parsed records, per-line errors)
pub fn process_lines(
    lines: Vec<(usize, String)>,
    key_field: Option<&str>,
) -> (Vec<Record>, Vec<RecordError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (line_number, line) in lines {
        match parse_record(&line, line_number, key_field) {
            Ok(record) => records.push(record),
            Err(err) => errors.push(err),
        }
    }

    (records, errors)
}

/// Text columns over record fields, in the given order.
///
/// Blank names are skipped; repeated names keep their first position.
pub fn build_columns(names: &[String], width: u32) -> Vec<Column<Record>> {
    let mut columns: Vec<Column<Record>> = Vec::with_capacity(names.len());
    for name in names {
        let id = match ColumnId::new(name.as_str()) {
            Ok(id) => id,
            Err(err) => {
                warn!(field = %name, error = %err, "Skipping column");
                continue;
            }
        };
        if columns.iter().any(|c| c.id() == &id) {
            continue;
        }
        columns.push(
            Column::text(id, name.as_str())
                .with_size(width)
                .with_min_size(MIN_COLUMN_WIDTH),
        );
    }
    columns
}

/// Table options for the host: selectable rows, JSON detail sub-rows, and
/// the pins, sort and page sizes from the config.
pub fn build_options(config: &ResolvedConfig, empty_message: String) -> TableOptions<Record> {
    let pinning = ColumnPinning::new(
        column_ids(&config.pin_left),
        column_ids(&config.pin_right),
    );
    let mut options = TableOptions::default()
        .with_page_size_options(config.page_size_options.clone())
        .with_pinned_columns(pinning)
        .with_selectable(true)
        .with_resizable(config.resizable)
        .with_empty_state(empty_message)
        .with_sub_component(|record: &Record| record.to_pretty_json());

    if let Some(spec) = &config.sort {
        match ColumnId::new(spec.column.as_str()) {
            Ok(column) => {
                options = options.with_initial_sort(SortState::new(column, spec.direction));
            }
            Err(err) => warn!(error = %err, "Ignoring initial sort"),
        }
    }
    options
}

/// Input shown before the first page arrives: no rows, loading.
pub fn initial_input(page_size: usize) -> TableInput<Record> {
    TableInput::new(Vec::new(), PagingData::new(0, 1, page_size)).with_loading(true)
}

fn column_ids(names: &[String]) -> Vec<ColumnId> {
    names
        .iter()
        .filter_map(|name| ColumnId::new(name.as_str()).ok())
        .collect()
}

/// Tracks what the host should fetch next.
///
/// Mirrors the engine's intents (sort, page, page size) and numbers every
/// query so only the answer to the latest one is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchController {
    page_index: usize,
    page_size: usize,
    sort: Option<SortState>,
    next_request_id: u64,
    latest: Option<u64>,
}

impl FetchController {
    /// Start on page 1 with no query in flight.
    pub fn new(page_size: usize, sort: Option<SortState>) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            sort,
            next_request_id: 1,
            latest: None,
        }
    }

    /// Page the next query asks for.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Page size the next query asks for.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sort the next query asks for.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Whether a query is outstanding.
    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Fold one engine event in. Returns `true` when a refetch is needed.
    ///
    /// A sort change returns to the first page.
    pub fn apply_event<T>(&mut self, event: &TableEvent<T>) -> bool {
        match event {
            TableEvent::Sort { order, key } => {
                self.sort = match order {
                    SortOrder::Asc => Some(SortState::new(key.clone(), SortDirection::Asc)),
                    SortOrder::Desc => Some(SortState::new(key.clone(), SortDirection::Desc)),
                    SortOrder::Cleared => None,
                };
                self.page_index = 1;
                true
            }
            TableEvent::PaginationChange(page) => {
                self.page_index = (*page).max(1);
                true
            }
            TableEvent::PageSizeChange(size) => {
                self.page_size = (*size).max(1);
                self.page_index = 1;
                true
            }
            TableEvent::CheckBoxChange { checked, .. } => {
                debug!(checked, "Row checkbox changed");
                false
            }
            TableEvent::IndeterminateCheckBoxChange { checked, rows } => {
                debug!(checked, rows = rows.len(), "Header checkbox changed");
                false
            }
        }
    }

    /// Fold a batch of events in. Returns `true` when any needs a refetch.
    pub fn apply_events<T>(&mut self, events: &[TableEvent<T>]) -> bool {
        events
            .iter()
            .fold(false, |refetch, event| self.apply_event(event) || refetch)
    }

    /// Issue a query for the current intent; it becomes the latest.
    pub fn next_query(&mut self) -> PageQuery {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest = Some(request_id);
        PageQuery {
            request_id,
            page_index: self.page_index,
            page_size: self.page_size,
            sort: self.sort.clone(),
        }
    }

    /// Turn a response into table input, or `None` if it is stale.
    ///
    /// A page past the end of a shrunken dataset is clamped in the paging
    /// metadata; the rows are whatever the source returned.
    pub fn accept(&mut self, response: PageResponse) -> Option<TableInput<Record>> {
        if self.latest != Some(response.request_id) {
            debug!(
                request = response.request_id,
                latest = ?self.latest,
                "Discarding stale response"
            );
            return None;
        }
        self.latest = None;

        let total = response.result.total;
        let paging = PagingData::new(total, response.query.page_index, response.query.page_size);
        self.page_index = paging.current_page();
        info!(
            request = response.request_id,
            page = paging.page_index(),
            rows = response.result.rows.len(),
            total,
            "Page applied"
        );
        Some(TableInput::new(response.result.rows, paging).with_no_data(total == 0))
    }
}
