//! storefront — a generated-style CRUD screen set for a Book entity.
//!
//! Renders list, detail, edit, and delete-confirmation view models,
//! wires them to routes, and dispatches actions against a client-side
//! state container that mirrors server entity state.
//!
//! ```text
//! route match → screen mounts → effect dispatches actions →
//! reducer slice updates → screen re-reads via selector → re-render
//! ```

pub mod app;
pub mod catalog;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod router;
pub mod store;

pub use app::{ScreenHost, ScreenProps};
pub use catalog::book::{Book, BookGateway, GatewayError, InMemoryGateway};
pub use i18n::Translator;
pub use nav::{History, Location};
pub use router::Route;
pub use store::{Slice, SliceKey, Store, StoreError};
