//! A live table instance and its imperative reset handle.
//!
//! The pure handlers take and return `TableState` by value. `TableInstance`
//! wraps one state in `Arc<RwLock<_>>` so that a [`ResetHandle`] handed to
//! the owning screen reaches the same table without a remount. A poisoned
//! lock turns writes into no-ops instead of panicking.

use crate::model::{Column, TableAction, TableEvent, TableRow};
use crate::state::{
    dispatch, selection_handler, sort_handler, TableInput, TableOptions, TableState,
};
use crate::view_state::{derive_view, TableView, WindowVariant};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::warn;

/// Owner-side handle to one table.
///
/// Cloning shares the same underlying state.
///
/// Caller predicates and renderers run while the state lock is held and
/// must not panic. A panic poisons the lock: the table is left empty,
/// later commands and inputs are dropped with a warning, and reads see the
/// empty state.
pub struct TableInstance<T, O = String> {
    inner: Arc<RwLock<TableState<T, O>>>,
}

impl<T, O> Clone for TableInstance<T, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: TableRow, O: Clone> TableInstance<T, O> {
    /// Mount a table with the given columns and options.
    pub fn new(columns: Vec<Column<T, O>>, options: TableOptions<T, O>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableState::new(columns, options))),
        }
    }

    /// Apply a command.
    pub fn dispatch(&self, action: TableAction) {
        update(&self.inner, |state| dispatch(state, action));
    }

    /// Hand over a new fetch result.
    pub fn set_input(&self, input: TableInput<T>) {
        update(&self.inner, |mut state| {
            state.set_input(input);
            state
        });
    }

    /// Mark a fetch as started or finished without replacing rows.
    pub fn set_loading(&self, loading: bool) {
        update(&self.inner, |mut state| {
            state.set_loading(loading);
            state
        });
    }

    /// Take every queued intent, oldest first.
    pub fn drain_events(&self) -> Vec<TableEvent<T>> {
        match self.inner.write() {
            Ok(mut guard) => guard.drain_events(),
            Err(_) => {
                warn!("Table state lock poisoned; no events drained");
                Vec::new()
            }
        }
    }

    /// Derive the current view model.
    pub fn view(&self, variant: WindowVariant) -> TableView<O> {
        self.with_state(|state| derive_view(state, variant))
    }

    /// Read the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&TableState<T, O>) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Handle that clears sorting or selection on this instance.
    pub fn reset_handle(&self) -> ResetHandle<T, O> {
        ResetHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Imperative escape hatch bound to a live [`TableInstance`].
///
/// Calls after the instance is dropped do nothing.
pub struct ResetHandle<T, O = String> {
    inner: Weak<RwLock<TableState<T, O>>>,
}

impl<T, O> Clone for ResetHandle<T, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: Clone, O> ResetHandle<T, O> {
    /// Clear the active sort.
    pub fn reset_sorting(&self) {
        if let Some(inner) = self.inner.upgrade() {
            update(&inner, sort_handler::handle_reset_sorting);
        }
    }

    /// Clear the selection.
    pub fn reset_selected(&self) {
        if let Some(inner) = self.inner.upgrade() {
            update(&inner, selection_handler::handle_reset_selected);
        }
    }

    /// Whether the instance is still alive.
    pub fn is_bound(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// Replace the state with `f(state)`.
///
/// The state is moved out before `f` runs, so a panic inside `f` leaves the
/// default state behind a poisoned lock.
fn update<T, O>(
    lock: &RwLock<TableState<T, O>>,
    f: impl FnOnce(TableState<T, O>) -> TableState<T, O>,
) {
    if let Ok(mut guard) = lock.write() {
        let state = std::mem::take(&mut *guard);
        *guard = f(state);
    } else {
        warn!("Table state lock poisoned; update skipped");
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
