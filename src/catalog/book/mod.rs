//! Book entity feature module: model, slice, gateway, effects, and
//! screens.

pub mod action;
pub mod effects;
pub mod gateway;
pub mod model;
pub mod reducer;
pub mod screens;
pub mod state;

pub use action::BookAction;
pub use gateway::{BookGateway, GatewayError, InMemoryGateway};
pub use model::Book;
pub use reducer::BookSlice;
pub use state::BookState;
