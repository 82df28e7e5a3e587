//! Table state machine (pure).
//!
//! All state transitions are pure functions testable without a UI.

pub mod dispatch;
pub mod expand_handler;
pub mod instance;
pub mod pagination_handler;
pub mod pinning_handler;
pub mod resize_handler;
pub mod selection_handler;
pub mod sort_handler;
pub mod table_state;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export for convenience
pub use dispatch::dispatch;
pub use instance::{ResetHandle, TableInstance};
pub use pinning_handler::{handle_pin, ColumnPinning};
pub use resize_handler::{ColumnSizing, ResizeDrag};
pub use table_state::{
    RowPredicate, RowsPredicate, SubComponent, TableInput, TableOptions, TableState,
};
