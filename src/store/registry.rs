//! Slice registry — type-erased storage behind the store lock.

use std::any::Any;
use std::collections::HashMap;

use crate::store::slice::{Slice, SliceKey};
use crate::store::StoreError;

/// Registry of named state slices.
///
/// Holds each slice's current state as a type-erased cell. The concrete
/// state type is recovered at dispatch/select time through the generic
/// [`Slice`] parameter, so a key collision between two slices with
/// different state types surfaces as [`StoreError::StateTypeMismatch`]
/// instead of silent corruption.
#[derive(Default)]
pub struct SliceRegistry {
    cells: HashMap<SliceKey, Box<dyn Any + Send>>,
}

impl SliceRegistry {
    /// Insert the slice's default state unless the key is already present.
    ///
    /// Returns `true` when the slice was newly registered. A repeated
    /// registration is a no-op: the existing cell, including any
    /// in-flight state it holds, is left untouched.
    pub fn register<S: Slice>(&mut self, feature_area: &str) -> bool {
        let key = SliceKey::new::<S>(feature_area);
        if self.cells.contains_key(&key) {
            return false;
        }
        self.cells.insert(key, Box::new(S::State::default()));
        true
    }

    pub fn contains(&self, key: &SliceKey) -> bool {
        self.cells.contains_key(key)
    }

    /// Run the slice's reducer over the cell in place.
    pub fn reduce<S: Slice>(
        &mut self,
        feature_area: &str,
        action: S::Action,
    ) -> Result<(), StoreError> {
        let key = SliceKey::new::<S>(feature_area);
        let cell = self
            .cells
            .get_mut(&key)
            .ok_or_else(|| StoreError::UnregisteredSlice { key: key.clone() })?;

        let state = cell
            .downcast_mut::<S::State>()
            .ok_or(StoreError::StateTypeMismatch { key })?;
        let next = S::reduce(std::mem::take(state), action);
        *state = next;
        Ok(())
    }

    /// Clone out the slice's current state.
    pub fn state<S: Slice>(&self, feature_area: &str) -> Result<S::State, StoreError> {
        let key = SliceKey::new::<S>(feature_area);
        let cell = self
            .cells
            .get(&key)
            .ok_or_else(|| StoreError::UnregisteredSlice { key: key.clone() })?;
        cell.downcast_ref::<S::State>()
            .cloned()
            .ok_or(StoreError::StateTypeMismatch { key })
    }
}
