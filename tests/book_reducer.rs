mod common;

use storefront::catalog::book::{Book, BookAction, BookSlice, BookState};
use storefront::Slice;

fn reduce(state: BookState, action: BookAction) -> BookState {
    BookSlice::reduce(state, action)
}

#[test]
fn fetch_started_raises_loading_and_lowers_success() {
    let state = BookState {
        update_success: true,
        error_message: Some("stale".to_string()),
        ..Default::default()
    };
    let next = reduce(state, BookAction::FetchStarted);
    assert!(next.loading);
    assert!(!next.update_success);
    assert_eq!(next.error_message, None);
}

#[test]
fn fetch_success_caches_the_entity() {
    let started = reduce(BookState::default(), BookAction::FetchStarted);
    let next = reduce(
        started,
        BookAction::FetchSucceeded {
            entity: common::dune(),
        },
    );
    assert!(!next.loading);
    assert_eq!(next.entity, common::dune());
    assert!(!next.update_success);
}

#[test]
fn fetch_all_success_replaces_the_list() {
    let next = reduce(
        BookState::default(),
        BookAction::FetchAllSucceeded {
            entities: vec![common::dune(), common::sparse_book(7)],
        },
    );
    assert_eq!(next.entities.len(), 2);
}

#[test]
fn save_success_sets_the_flag_and_entity() {
    let started = reduce(BookState::default(), BookAction::SaveStarted);
    assert!(started.updating);
    let next = reduce(
        started,
        BookAction::SaveSucceeded {
            entity: common::dune(),
        },
    );
    assert!(!next.updating);
    assert!(next.update_success);
    assert_eq!(next.entity.id, Some(42));
}

#[test]
fn delete_success_clears_the_cached_entity() {
    let state = BookState {
        entity: common::dune(),
        ..Default::default()
    };
    let started = reduce(state, BookAction::DeleteStarted);
    let next = reduce(started, BookAction::DeleteSucceeded);
    assert!(next.update_success);
    assert_eq!(next.entity, Book::default());
}

#[test]
fn failure_records_the_message_and_stops_spinners() {
    let state = BookState {
        loading: true,
        updating: true,
        ..Default::default()
    };
    let next = reduce(
        state,
        BookAction::Failed {
            message: "no book with id 9".to_string(),
        },
    );
    assert!(!next.loading);
    assert!(!next.updating);
    assert_eq!(next.error_message.as_deref(), Some("no book with id 9"));
}

#[test]
fn reset_returns_to_default() {
    let state = BookState {
        entity: common::dune(),
        update_success: true,
        ..Default::default()
    };
    assert_eq!(reduce(state, BookAction::Reset), BookState::default());
}
