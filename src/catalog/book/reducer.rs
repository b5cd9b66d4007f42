//! Book slice reducer.

use crate::catalog::book::action::BookAction;
use crate::catalog::book::model::Book;
use crate::catalog::book::state::BookState;
use crate::store::Slice;

/// The book slice: registered as `<feature area>.book`.
pub struct BookSlice;

impl Slice for BookSlice {
    type State = BookState;
    type Action = BookAction;

    const NAME: &'static str = "book";

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // Every started action lowers update_success, so success
            // observed later is never a leftover from a previous
            // operation.
            BookAction::FetchAllStarted | BookAction::FetchStarted => BookState {
                loading: true,
                error_message: None,
                update_success: false,
                ..state
            },
            BookAction::SaveStarted | BookAction::DeleteStarted => BookState {
                updating: true,
                error_message: None,
                update_success: false,
                ..state
            },
            BookAction::FetchAllSucceeded { entities } => BookState {
                loading: false,
                entities,
                ..state
            },
            BookAction::FetchSucceeded { entity } => BookState {
                loading: false,
                entity,
                ..state
            },
            BookAction::SaveSucceeded { entity } => BookState {
                updating: false,
                update_success: true,
                entity,
                ..state
            },
            BookAction::DeleteSucceeded => BookState {
                updating: false,
                update_success: true,
                entity: Book::default(),
                ..state
            },
            BookAction::Failed { message } => BookState {
                loading: false,
                updating: false,
                error_message: Some(message),
                ..state
            },
            BookAction::Reset => BookState::default(),
        }
    }
}
