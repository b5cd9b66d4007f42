//! Book slice state.

use crate::catalog::book::model::Book;

/// State held by the book slice.
///
/// Mirrors server entity state on the client: the last fetched list,
/// a single-entity cache, and operation-status flags. The default
/// value (empty list, all-absent entity, all flags down) is what a
/// screen sees before any action has completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookState {
    /// A fetch (list or single) is in flight.
    pub loading: bool,
    /// Message from the most recent failed operation, if any.
    pub error_message: Option<String>,
    /// Last fetched entity list.
    pub entities: Vec<Book>,
    /// Single-entity cache for detail/edit/delete screens.
    pub entity: Book,
    /// A save or delete is in flight.
    pub updating: bool,
    /// The most recent save/delete completed successfully.
    ///
    /// Reset by every started action, so a screen observing it `true`
    /// knows the success happened after its own dispatch.
    pub update_success: bool,
}
