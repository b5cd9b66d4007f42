//! Location and navigation history.

/// A parsed navigation target: path plus verbatim query string.
///
/// The search string (including its leading `?`) is carried around
/// untouched so screens can append it to the targets they emit and a
/// round trip through list → dialog → list keeps the caller's query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    /// Split an href into path and search at the first `?`.
    pub fn parse(href: &str) -> Self {
        match href.split_once('?') {
            Some((path, search)) => Self {
                path: path.to_string(),
                search: format!("?{search}"),
            },
            None => Self {
                path: href.to_string(),
                search: String::new(),
            },
        }
    }

    /// Reassemble the full href.
    pub fn href(&self) -> String {
        format!("{}{}", self.path, self.search)
    }
}

/// Navigation history as an inspectable stack.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<Location>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new location onto the stack.
    pub fn navigate(&mut self, location: Location) {
        tracing::debug!(href = %location.href(), "navigate");
        self.stack.push(location);
    }

    /// Swap the top of the stack for a new location.
    ///
    /// On an empty stack there is nothing to swap and the location is
    /// simply pushed, leaving a one-entry history.
    pub fn replace(&mut self, location: Location) {
        tracing::debug!(href = %location.href(), "replace");
        self.stack.pop();
        self.stack.push(location);
    }

    /// The location currently on top, if any.
    pub fn current(&self) -> Option<&Location> {
        self.stack.last()
    }

    pub fn entries(&self) -> &[Location] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
