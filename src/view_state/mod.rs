//! View-state layer - derived, render-ready models of a table
//!
//! Everything here is a pure function of `TableState`. Hosts draw the
//! resulting `TableView`; they never inspect the state directly.
//!
//! # Module Structure
//!
//! - `page_window`: PageItem, WindowVariant - compact page-number windows
//! - `pagination`: PaginationView - controls, guards and row range
//! - `checkbox`: CheckState, CheckboxView - tri-state row/header checkboxes
//! - `sticky`: ColumnPlacement - render order and sticky offsets of pinned columns
//! - `table_view`: TableView - header, body (skeleton/empty/populated) and pagination

pub mod checkbox;
pub mod page_window;
pub mod pagination;
pub mod sticky;
pub mod table_view;

pub use checkbox::{CheckState, CheckboxView};
pub use page_window::{compute_window, total_pages, PageItem, WindowVariant};
pub use pagination::PaginationView;
pub use sticky::{layout_columns, left_offsets, right_offsets, ColumnPlacement};
pub use table_view::{
    derive_view, EmptyState, HeaderCell, RowView, SkeletonCell, SkeletonRow, TableBody,
    TableView,
};
