//! Background fetch worker.
//!
//! A source runs on its own thread and answers [`PageQuery`]s over
//! `std::sync::mpsc` channels. Dropping the worker closes the query channel,
//! which ends the thread.

use crate::model::error::InputError;
use crate::source::{JsonlSource, PageQuery, PageResponse, RecordSource};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Handle to a source running on a background thread.
#[derive(Debug)]
pub struct SourceWorker {
    queries: Option<Sender<PageQuery>>,
    responses: Receiver<PageResponse>,
    handle: Option<JoinHandle<()>>,
}

impl SourceWorker {
    /// Start answering queries against `source`.
    ///
    /// `latency` is slept before each answer; hosts use it to make the
    /// loading states visible on small local files.
    pub fn spawn(source: JsonlSource, latency: Duration) -> Result<Self, InputError> {
        let (query_tx, query_rx) = mpsc::channel::<PageQuery>();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("tabula-source".to_string())
            .spawn(move || {
                for query in query_rx {
                    if !latency.is_zero() {
                        thread::sleep(latency);
                    }
                    let result = source.fetch(&query);
                    debug!(
                        request = query.request_id,
                        rows = result.rows.len(),
                        total = result.total,
                        "Page fetched"
                    );
                    let response = PageResponse {
                        request_id: query.request_id,
                        query,
                        result,
                    };
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
                debug!("Source worker stopped");
            })?;

        Ok(Self {
            queries: Some(query_tx),
            responses: response_rx,
            handle: Some(handle),
        })
    }

    /// Queue a query for the worker.
    ///
    /// # Errors
    ///
    /// `InputError::SourceDisconnected` if the worker thread has exited.
    pub fn request(&self, query: PageQuery) -> Result<(), InputError> {
        self.queries
            .as_ref()
            .ok_or(InputError::SourceDisconnected)?
            .send(query)
            .map_err(|_| InputError::SourceDisconnected)
    }

    /// Next finished response, if any.
    pub fn try_recv(&self) -> Option<PageResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Source worker response channel closed");
                None
            }
        }
    }

    /// Block until a response arrives or `timeout` passes.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PageResponse> {
        self.responses.recv_timeout(timeout).ok()
    }
}

impl Drop for SourceWorker {
    fn drop(&mut self) {
        // closing the query channel ends the worker loop
        self.queries.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Source worker panicked");
            }
        }
    }
}
