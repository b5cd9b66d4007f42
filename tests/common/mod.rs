//! Shared test fixtures for the screen tests.

#![allow(dead_code)]

use storefront::catalog::book::{Book, InMemoryGateway};
use storefront::{ScreenHost, Translator};

/// The sample record most scenarios revolve around.
pub fn dune() -> Book {
    Book {
        id: Some(42),
        name: Some("Dune".to_string()),
        description: Some("Spice and sandworms".to_string()),
        price: Some(12.5),
    }
}

/// A record with only a name, for absent-field rendering.
pub fn sparse_book(id: i64) -> Book {
    Book {
        id: Some(id),
        name: Some("Untitled".to_string()),
        description: None,
        price: None,
    }
}

/// Host over a gateway seeded with the given books, no translations.
pub fn seeded_host(books: Vec<Book>) -> ScreenHost<InMemoryGateway> {
    ScreenHost::new(InMemoryGateway::seeded(books), Translator::empty())
}

/// Host over an empty gateway.
pub fn empty_host() -> ScreenHost<InMemoryGateway> {
    seeded_host(Vec::new())
}

/// A small translation bundle exercising the keys the screens use.
pub fn bundle() -> Translator {
    Translator::from_json(
        r#"{
            "storefrontApp": {
                "book": {
                    "home": {
                        "title": "Bücher",
                        "notFound": "Keine Bücher gefunden"
                    },
                    "delete": {
                        "question": "Soll Buch {{ id }} wirklich gelöscht werden?"
                    }
                }
            }
        }"#,
    )
    .expect("bundle parses")
}
