//! tabula
//!
//! A server-driven table engine and a terminal host for it.
//!
//! The engine (`state`, `view_state`) owns sort, paging, selection,
//! expansion, pinning and sizing for whatever page of rows it was handed, and
//! reports what the owner should fetch next as events. It never fetches.
//! The host (`view`, `source`, `integration`) renders the engine with ratatui
//! and answers its events from a JSONL file.
//!
//! Follows the Pure Core / Impure Shell split: everything under `model`,
//! `state` and `view_state` is pure and testable without a terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

// Glue between the engine and a record source
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
