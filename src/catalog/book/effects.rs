//! Async orchestration between the gateway and the book slice.
//!
//! Each effect dispatches a started action, awaits the gateway, then
//! dispatches exactly one completion action. The caller awaits the
//! effect, so completion is always observed after the initiating
//! dispatch and before whatever the caller does next (navigation
//! included). Gateway failures land in the slice's error message and
//! are logged; they never propagate as `Err`.

use tracing::warn;

use crate::catalog::book::action::BookAction;
use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::model::Book;
use crate::catalog::book::reducer::BookSlice;
use crate::store::{Store, StoreError};

/// Fetch the full entity list into the slice.
pub async fn fetch_all(
    store: &Store,
    area: &str,
    gateway: &dyn BookGateway,
) -> Result<(), StoreError> {
    store.dispatch::<BookSlice>(area, BookAction::FetchAllStarted)?;
    match gateway.find_all().await {
        Ok(entities) => store.dispatch::<BookSlice>(area, BookAction::FetchAllSucceeded { entities }),
        Err(err) => {
            warn!(error = %err, "book list fetch failed");
            store.dispatch::<BookSlice>(
                area,
                BookAction::Failed {
                    message: err.to_string(),
                },
            )
        }
    }
}

/// Fetch one entity by id into the slice cache.
pub async fn fetch(
    store: &Store,
    area: &str,
    gateway: &dyn BookGateway,
    id: i64,
) -> Result<(), StoreError> {
    store.dispatch::<BookSlice>(area, BookAction::FetchStarted)?;
    match gateway.find_by_id(id).await {
        Ok(entity) => store.dispatch::<BookSlice>(area, BookAction::FetchSucceeded { entity }),
        Err(err) => {
            warn!(id, error = %err, "book fetch failed");
            store.dispatch::<BookSlice>(
                area,
                BookAction::Failed {
                    message: err.to_string(),
                },
            )
        }
    }
}

/// Persist a record: create when the id is absent, full replace
/// otherwise.
pub async fn save(
    store: &Store,
    area: &str,
    gateway: &dyn BookGateway,
    book: Book,
) -> Result<(), StoreError> {
    store.dispatch::<BookSlice>(area, BookAction::SaveStarted)?;
    let result = if book.is_persisted() {
        gateway.update(book).await
    } else {
        gateway.create(book).await
    };
    match result {
        Ok(entity) => store.dispatch::<BookSlice>(area, BookAction::SaveSucceeded { entity }),
        Err(err) => {
            warn!(error = %err, "book save failed");
            store.dispatch::<BookSlice>(
                area,
                BookAction::Failed {
                    message: err.to_string(),
                },
            )
        }
    }
}

/// Delete a record and clear the slice cache on success.
pub async fn delete(
    store: &Store,
    area: &str,
    gateway: &dyn BookGateway,
    id: i64,
) -> Result<(), StoreError> {
    store.dispatch::<BookSlice>(area, BookAction::DeleteStarted)?;
    match gateway.delete(id).await {
        Ok(()) => store.dispatch::<BookSlice>(area, BookAction::DeleteSucceeded),
        Err(err) => {
            warn!(id, error = %err, "book delete failed");
            store.dispatch::<BookSlice>(
                area,
                BookAction::Failed {
                    message: err.to_string(),
                },
            )
        }
    }
}

/// Return the slice to its default state.
pub fn reset(store: &Store, area: &str) -> Result<(), StoreError> {
    store.dispatch::<BookSlice>(area, BookAction::Reset)
}
