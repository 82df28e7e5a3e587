//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through keys
//! and mouse events against an in-memory JSONL source, checking both the
//! engine state and the rendered frame.


// Harness-based acceptance tests
mod acceptance_columns;
mod acceptance_render;
