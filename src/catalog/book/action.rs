//! Book slice actions.

use crate::catalog::book::model::Book;

/// Lifecycle actions dispatched into the book slice.
///
/// Effects dispatch a `*Started` action before awaiting the gateway
/// and exactly one completion (`*Succeeded` or `Failed`) after.
#[derive(Debug, Clone, PartialEq)]
pub enum BookAction {
    FetchAllStarted,
    FetchAllSucceeded { entities: Vec<Book> },
    FetchStarted,
    FetchSucceeded { entity: Book },
    SaveStarted,
    SaveSucceeded { entity: Book },
    DeleteStarted,
    DeleteSucceeded,
    Failed { message: String },
    /// Return the slice to its default state (create-mode mount).
    Reset,
}
