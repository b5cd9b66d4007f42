//! Catalog feature area.
//!
//! Groups the entity slices this feature contributes to the store and
//! registers them on activation. Activation may happen any number of
//! times (every visit to a catalog route); registration is idempotent.

pub mod book;

use crate::store::Store;

/// The feature area key all catalog slices register under; selector
/// paths read `catalog.<slice>`.
pub const FEATURE_AREA: &str = "catalog";

/// Merge the catalog reducer slices into the store.
///
/// Safe to call repeatedly: a slice already present keeps its state.
pub fn register(store: &Store) {
    store.register_slice::<book::BookSlice>(FEATURE_AREA);
}
