//! Slice trait — the unit of state a feature registers into the store.

use std::fmt;

/// A named branch of store state together with its pure reducer.
///
/// A slice is registered under a `(feature area, slice name)` key and
/// owns one `State` value inside the store. All transitions of that
/// value go through [`Slice::reduce`].
pub trait Slice: 'static {
    /// The state this slice holds. `Default` is the pre-action value.
    type State: Clone + Default + Send + 'static;

    /// The actions this slice's reducer understands.
    type Action: Send + 'static;

    /// Slice name within its feature area (e.g. `"book"`).
    const NAME: &'static str;

    /// Pure state transition: (State, Action) -> State.
    ///
    /// Must not dispatch, block, or touch anything outside its inputs.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Fully-qualified slice address inside a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceKey {
    pub feature_area: String,
    pub slice: &'static str,
}

impl SliceKey {
    pub fn new<S: Slice>(feature_area: &str) -> Self {
        Self {
            feature_area: feature_area.to_string(),
            slice: S::NAME,
        }
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.feature_area, self.slice)
    }
}
