//! Error types for the tabula host and its data source.
//!
//! The table engine itself has no fatal path: invalid input is sanitized and
//! stale commands are ignored. The types here cover the impure shell around
//! it, composed with `thiserror` so `?` converts them upward.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - Opening or reading the JSONL source failed
//!   - [`RecordError`] - A JSONL line could not be turned into a record
//!   - [`ConfigError`] - The config file could not be read, parsed or validated
//!   - [`LoggingError`] - The tracing subscriber could not be installed
//!   - [`TuiError`] - Terminal setup or rendering failed
//!
//! # Recovery Strategy
//!
//! Record errors are **non-fatal**: the offending line is logged with its line
//! number and skipped. Everything else propagates to `main` and ends the run
//! after the terminal is restored.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::logging::LoggingError;
pub use crate::view::TuiError;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use tabula::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     let _input = open_source()?;
///     Ok(())
/// }
/// # fn open_source() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The record source could not be opened or read. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A record could not be parsed where a caller chose to treat it as fatal.
    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors encountered when reading records from a file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given JSONL file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tabula::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The background fetch worker is gone and cannot answer queries.
    #[error("Record source worker disconnected")]
    SourceDisconnected,

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single JSONL line that could not become a record.
///
/// Non-fatal: logged and skipped by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line is not valid JSON.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// The line is valid JSON but not an object.
    #[error("Line {line} is not a JSON object")]
    NotAnObject {
        /// 1-based line number.
        line: usize,
    },
}
