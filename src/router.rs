//! Route composition for the book screen set.
//!
//! Pure declarative mapping from path segments to screens, nested by
//! entity id:
//!
//! ```text
//! /book             list
//! /book/new         update (create mode)
//! /book/:id         detail
//! /book/:id/edit    update (edit mode)
//! /book/:id/delete  delete confirmation
//! ```
//!
//! No guards, no loaders; each leaf screen performs its own fetch on
//! mount. Unknown paths resolve to nothing.

/// The screen a path resolves to, with the captured id where nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Detail { id: i64 },
    Edit { id: i64 },
    Delete { id: i64 },
}

/// Resolve a path (no query string) against the book route table.
pub fn resolve(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        ["book"] => Some(Route::List),
        ["book", "new"] => Some(Route::Create),
        ["book", id] => Some(Route::Detail { id: id.parse().ok()? }),
        ["book", id, "edit"] => Some(Route::Edit { id: id.parse().ok()? }),
        ["book", id, "delete"] => Some(Route::Delete { id: id.parse().ok()? }),
        _ => None,
    }
}
