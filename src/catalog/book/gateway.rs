//! Async boundary to the server for Book records.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::catalog::book::model::Book;

/// Errors from gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no book with id {id}")]
    NotFound { id: i64 },

    #[error("cannot replace a book that has no id")]
    MissingId,

    #[error("gateway request failed: {message}")]
    Request { message: String },
}

/// The external layer the book actions consume.
///
/// All operations are asynchronous and fallible. `create` assigns the
/// id; `update` is a full-record replace of an existing id.
#[async_trait]
pub trait BookGateway: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Book>, GatewayError>;
    async fn find_by_id(&self, id: i64) -> Result<Book, GatewayError>;
    async fn create(&self, book: Book) -> Result<Book, GatewayError>;
    async fn update(&self, book: Book) -> Result<Book, GatewayError>;
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}

/// In-memory gateway backing the demo binary and tests.
#[derive(Default)]
pub struct InMemoryGateway {
    inner: Mutex<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    records: BTreeMap<i64, Book>,
    next_id: i64,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a gateway pre-populated with records. Ids are assigned
    /// for any book that lacks one.
    pub fn seeded(books: impl IntoIterator<Item = Book>) -> Self {
        let gateway = Self::new();
        {
            let mut state = gateway.inner.lock();
            for mut book in books {
                let id = match book.id {
                    Some(id) => id,
                    None => {
                        state.next_id += 1;
                        state.next_id
                    }
                };
                state.next_id = state.next_id.max(id);
                book.id = Some(id);
                state.records.insert(id, book);
            }
        }
        gateway
    }
}

#[async_trait]
impl BookGateway for InMemoryGateway {
    async fn find_all(&self) -> Result<Vec<Book>, GatewayError> {
        Ok(self.inner.lock().records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Book, GatewayError> {
        self.inner
            .lock()
            .records
            .get(&id)
            .cloned()
            .ok_or(GatewayError::NotFound { id })
    }

    async fn create(&self, mut book: Book) -> Result<Book, GatewayError> {
        let mut state = self.inner.lock();
        state.next_id += 1;
        let id = state.next_id;
        book.id = Some(id);
        state.records.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book, GatewayError> {
        let id = book.id.ok_or(GatewayError::MissingId)?;
        let mut state = self.inner.lock();
        if !state.records.contains_key(&id) {
            return Err(GatewayError::NotFound { id });
        }
        state.records.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        let mut state = self.inner.lock();
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound { id })
    }
}
