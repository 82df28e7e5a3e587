//! In-memory JSONL dataset.
//!
//! The whole file is read once. Malformed lines are logged and skipped;
//! queries sort a view of the records and slice out one page.

use crate::integration::process_lines;
use crate::model::error::InputError;
use crate::model::{SortDirection, TableRow};
use crate::source::record::Record;
use crate::source::{PageQuery, PageResult, RecordSource};
use serde_json::Value;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Records loaded from a JSONL file.
#[derive(Debug, Clone, Default)]
pub struct JsonlSource {
    records: Vec<Record>,
    skipped: usize,
}

impl JsonlSource {
    /// Load every record from `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn load(path: impl AsRef<Path>, key_field: Option<&str>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = Self::from_reader(File::open(path)?, key_field)?;
        info!(
            path = %path.display(),
            records = source.records.len(),
            skipped = source.skipped,
            "JSONL source loaded"
        );
        Ok(source)
    }

    /// Read records from any reader. Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` when reading fails.
    pub fn from_reader(reader: impl Read, key_field: Option<&str>) -> Result<Self, InputError> {
        let mut numbered = Vec::new();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if !line.trim().is_empty() {
                numbered.push((index + 1, line));
            }
        }

        let (records, errors) = process_lines(numbered, key_field);
        for error in &errors {
            warn!(%error, "Skipping malformed line");
        }
        Ok(Self {
            records,
            skipped: errors.len(),
        })
    }

    /// Wrap records that are already parsed.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of malformed lines dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Field names of the first record, used when no columns are given.
    pub fn field_names(&self) -> Vec<String> {
        self.records
            .first()
            .map(|r| r.field_names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl RecordSource for JsonlSource {
    type Row = Record;

    fn fetch(&self, query: &PageQuery) -> PageResult<Record> {
        let total = self.records.len();
        let mut order: Vec<&Record> = self.records.iter().collect();

        if let Some(sort) = &query.sort {
            // stable, so equal keys keep file order
            order.sort_by(|a, b| {
                let ordering = compare_values(
                    &a.cell_value(&sort.column),
                    &b.cell_value(&sort.column),
                );
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => reverse_keeping_nulls_last(ordering, a, b, sort),
                }
            });
        }

        let size = query.page_size.max(1);
        let start = query.page_index.saturating_sub(1).saturating_mul(size);
        let rows = order
            .into_iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();
        PageResult { rows, total }
    }

    fn total(&self) -> usize {
        self.records.len()
    }
}

fn reverse_keeping_nulls_last(
    ordering: Ordering,
    a: &Record,
    b: &Record,
    sort: &crate::model::SortState,
) -> Ordering {
    let a_null = a.cell_value(&sort.column).is_null();
    let b_null = b.cell_value(&sort.column).is_null();
    if a_null || b_null {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Total order over JSON cell values.
///
/// Nulls sort last; numbers compare numerically; strings lexicographically;
/// values of different types order as bool < number < string < array < object.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(a, b)| compare_values(a, b))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}
