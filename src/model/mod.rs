//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod action;
pub mod column;
pub mod error;
pub mod event;
pub mod key_action;
pub mod paging;
pub mod row;

// Re-export for convenience
pub use action::{PinSide, TableAction};
pub use column::{cell_text, CellRenderer, CellValue, Column, ColumnId, InvalidColumnId};
pub use error::{AppError, InputError, RecordError};
pub use event::{SortDirection, SortOrder, SortState, TableEvent};
pub use key_action::KeyAction;
pub use paging::{
    check_page_size, InvalidPageSize, PagingData, PagingInput, DEFAULT_PAGE_INDEX,
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, MAX_PAGE_SIZE,
};
pub use row::{assign_row_ids, RowId, TableRow};
