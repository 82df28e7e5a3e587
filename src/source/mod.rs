//! Record sources answering page queries.
//!
//! The table engine never fetches. The host turns engine events into
//! [`PageQuery`]s, sends them to a source, and feeds the answers back as
//! table input. This module provides:
//! - [`JsonlSource`]: an in-memory JSONL dataset that sorts and slices
//! - [`SourceWorker`]: runs a source on a background thread
//! - [`Fetcher`]: the host-facing handle over either of the two

use crate::model::error::InputError;
use crate::model::SortState;
use std::collections::VecDeque;

pub mod file;
pub mod record;
pub mod worker;

pub use file::{compare_values, JsonlSource};
pub use record::{parse_record, Record};
pub use worker::SourceWorker;

/// One page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Monotonically increasing; answers to older ids are stale.
    pub request_id: u64,
    /// 1-based page number.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Sort to apply before slicing.
    pub sort: Option<SortState>,
}

/// Rows of one page plus the size of the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// Rows of the requested page.
    pub rows: Vec<T>,
    /// Rows in the whole dataset.
    pub total: usize,
}

/// A result tagged with the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T = Record> {
    /// Id of the query this answers.
    pub request_id: u64,
    /// The query as submitted.
    pub query: PageQuery,
    /// The page.
    pub result: PageResult<T>,
}

/// Anything that can answer page queries.
pub trait RecordSource {
    /// Row type the source yields.
    type Row;

    /// Sort, then slice out the requested page.
    fn fetch(&self, query: &PageQuery) -> PageResult<Self::Row>;

    /// Number of rows in the dataset.
    fn total(&self) -> usize;
}

/// How the host reaches its source.
///
/// `Worker` answers asynchronously on a thread; `Inline` answers during
/// `request` and queues the response, which keeps tests deterministic.
#[derive(Debug)]
pub enum Fetcher {
    /// Answers on a background thread.
    Worker(SourceWorker),
    /// Answers synchronously.
    Inline {
        /// The loaded dataset.
        source: JsonlSource,
        /// Answers not yet collected.
        ready: VecDeque<PageResponse>,
    },
}

impl Fetcher {
    /// Answer queries synchronously from `source`.
    pub fn inline(source: JsonlSource) -> Self {
        Fetcher::Inline {
            source,
            ready: VecDeque::new(),
        }
    }

    /// Submit a query.
    ///
    /// # Errors
    ///
    /// `InputError::SourceDisconnected` when the worker thread has gone away.
    pub fn request(&mut self, query: PageQuery) -> Result<(), InputError> {
        match self {
            Fetcher::Worker(worker) => worker.request(query),
            Fetcher::Inline { source, ready } => {
                let result = source.fetch(&query);
                ready.push_back(PageResponse {
                    request_id: query.request_id,
                    query,
                    result,
                });
                Ok(())
            }
        }
    }

    /// Take the next available response without blocking.
    pub fn try_recv(&mut self) -> Option<PageResponse> {
        match self {
            Fetcher::Worker(worker) => worker.try_recv(),
            Fetcher::Inline { ready, .. } => ready.pop_front(),
        }
    }
}
