//! A JSONL record as a table row.

use crate::model::{CellValue, ColumnId, RecordError, TableRow};
use serde_json::{Map, Value};

/// One JSON object from a JSONL file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: Option<String>,
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap an object, taking the row key from `key_field` when present.
    ///
    /// String keys are used verbatim, numbers and booleans via their JSON
    /// text; any other type leaves the record unkeyed.
    pub fn new(fields: Map<String, Value>, key_field: Option<&str>) -> Self {
        let key = key_field
            .and_then(|field| fields.get(field))
            .and_then(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            });
        Self { key, fields }
    }

    /// Value of one field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Field names in map order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Pretty-printed JSON of the whole record.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

impl TableRow for Record {
    fn key(&self) -> Option<String> {
        self.key.clone()
    }

    fn cell_value(&self, column: &ColumnId) -> CellValue {
        self.fields.get(column.as_str()).cloned().unwrap_or(Value::Null)
    }
}

/// Parse one JSONL line.
///
/// # Errors
///
/// `RecordError::InvalidJson` for unparsable text, `RecordError::NotAnObject`
/// for JSON that is not an object.
pub fn parse_record(
    line: &str,
    line_number: usize,
    key_field: Option<&str>,
) -> Result<Record, RecordError> {
    let value: Value = serde_json::from_str(line).map_err(|e| RecordError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;
    match value {
        Value::Object(fields) => Ok(Record::new(fields, key_field)),
        _ => Err(RecordError::NotAnObject { line: line_number }),
    }
}
