//! Client-side state container.
//!
//! A [`Store`] is a shared handle over a registry of named state
//! slices. Features register their slices lazily (idempotently) and
//! screens interact with it in exactly two ways:
//!
//! ```text
//! Action ──→ dispatch ──→ Slice::reduce ──→ State ──→ select
//! ```
//!
//! Dispatch is serialized by a single lock, so every transition sees
//! the state left by the previous one. Reducers are pure and never
//! dispatch re-entrantly.

mod registry;
mod slice;

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use registry::SliceRegistry;

pub use slice::{Slice, SliceKey};

/// Errors from store access.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no slice registered under '{key}'")]
    UnregisteredSlice { key: SliceKey },

    #[error("slice '{key}' is registered with a different state type")]
    StateTypeMismatch { key: SliceKey },
}

/// Shared store handle with interior mutability.
///
/// Cloning is cheap; all clones address the same registry. The owning
/// application decides whether the store is process-wide.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<SliceRegistry>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slice under a feature area, exactly once.
    ///
    /// Returns `true` when the slice was newly added. Registering an
    /// already-present slice is idempotent: no duplicate state branch
    /// is created and the existing slice state is preserved.
    pub fn register_slice<S: Slice>(&self, feature_area: &str) -> bool {
        let added = self.inner.lock().register::<S>(feature_area);
        if added {
            tracing::debug!(area = feature_area, slice = S::NAME, "slice registered");
        }
        added
    }

    /// Whether a slice is present under the given key.
    pub fn has_slice(&self, key: &SliceKey) -> bool {
        self.inner.lock().contains(key)
    }

    /// Dispatch an action into a slice's reducer.
    ///
    /// Actions are reduced one at a time under the store lock.
    pub fn dispatch<S: Slice>(
        &self,
        feature_area: &str,
        action: S::Action,
    ) -> Result<(), StoreError> {
        self.inner.lock().reduce::<S>(feature_area, action)
    }

    /// Read a value out of a slice's current state.
    pub fn select<S, T, F>(&self, feature_area: &str, selector: F) -> Result<T, StoreError>
    where
        S: Slice,
        F: FnOnce(&S::State) -> T,
    {
        let state = self.inner.lock().state::<S>(feature_area)?;
        Ok(selector(&state))
    }

    /// Clone out a slice's full state.
    pub fn state<S: Slice>(&self, feature_area: &str) -> Result<S::State, StoreError> {
        self.inner.lock().state::<S>(feature_area)
    }
}
