//! Column definitions and the cell rendering capability.
//!
//! A [`Column`] describes how one field of an opaque row is projected into a
//! cell. Columns are immutable once handed to a table; tracked widths live in
//! [`crate::state::ColumnSizing`].

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Width assigned to a column that does not declare one.
pub const DEFAULT_COLUMN_SIZE: u32 = 150;

/// Lower bound assigned to a column that does not declare one.
pub const DEFAULT_MIN_COLUMN_SIZE: u32 = 20;

/// Raw value a row exposes for a column.
pub type CellValue = serde_json::Value;

/// Identifier of a column, unique within one table.
///
/// The inner string stays private; ids are built through [`ColumnId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Smart constructor: rejects empty or whitespace-only ids
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidColumnId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidColumnId::Empty);
        }
        Ok(Self(raw))
    }

    /// The id as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a column id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColumnId {
    /// Empty or whitespace-only.
    #[error("Column ID cannot be empty")]
    Empty,
}

/// Capability that turns a cell value into host output.
///
/// `O` is opaque to the engine: a terminal host renders `String`s, other
/// hosts may produce styled spans or widget trees. Any
/// `Fn(&CellValue, &T) -> O` closure is a renderer.
pub trait CellRenderer<T, O>: Send + Sync {
    /// Render the value of one cell of `row`.
    fn render(&self, value: &CellValue, row: &T) -> O;
}

impl<T, O, F> CellRenderer<T, O> for F
where
    F: Fn(&CellValue, &T) -> O + Send + Sync,
{
    fn render(&self, value: &CellValue, row: &T) -> O {
        self(value, row)
    }
}

/// Plain-text projection of a cell value.
///
/// Strings are shown without quotes, `null` as an empty cell, and
/// structured values as compact JSON.
pub fn cell_text(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::String(s) => s.clone(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// A displayable column over rows of type `T`, producing output `O`.
pub struct Column<T, O = String> {
    id: ColumnId,
    header: String,
    renderer: Arc<dyn CellRenderer<T, O>>,
    sortable: bool,
    pinnable: bool,
    size: u32,
    min_size: u32,
}

impl<T, O> Column<T, O> {
    /// Create a sortable, pinnable column with default sizing.
    pub fn new<R>(id: ColumnId, header: impl Into<String>, renderer: R) -> Self
    where
        R: CellRenderer<T, O> + 'static,
    {
        Self {
            id,
            header: header.into(),
            renderer: Arc::new(renderer),
            sortable: true,
            pinnable: true,
            size: DEFAULT_COLUMN_SIZE,
            min_size: DEFAULT_MIN_COLUMN_SIZE,
        }
    }

    /// Allow or forbid sorting on this column.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Allow or forbid pinning this column.
    pub fn with_pinnable(mut self, pinnable: bool) -> Self {
        self.pinnable = pinnable;
        self
    }

    /// Initial width.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Width resizing never goes below.
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Column id.
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether sort commands apply to this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether pin commands apply to this column.
    pub fn is_pinnable(&self) -> bool {
        self.pinnable
    }

    /// Declared width, never below `min_size`.
    pub fn size(&self) -> u32 {
        self.size.max(self.min_size)
    }

    /// Smallest width a resize may set.
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Render one cell through the column's renderer.
    pub fn render(&self, value: &CellValue, row: &T) -> O {
        self.renderer.render(value, row)
    }
}

impl<T: 'static> Column<T, String> {
    /// Column that renders its value as plain text via [`cell_text`].
    pub fn text(id: ColumnId, header: impl Into<String>) -> Self {
        Self::new(id, header, |value: &CellValue, _row: &T| cell_text(value))
    }
}

impl<T, O> Clone for Column<T, O> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            renderer: Arc::clone(&self.renderer),
            sortable: self.sortable,
            pinnable: self.pinnable,
            size: self.size,
            min_size: self.min_size,
        }
    }
}

impl<T, O> fmt::Debug for Column<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("pinnable", &self.pinnable)
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .finish_non_exhaustive()
    }
}

// ===== Tests =====
