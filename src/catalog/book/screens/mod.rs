//! Book screens: list, detail, update form, delete confirmation.
//!
//! Each screen is a small controller with component-local state only.
//! Slice state is read through selectors at render time; `mount`
//! dispatches the screen's initial fetch and `sync` turns observed
//! slice state into local transitions and navigation decisions.

mod delete;
mod detail;
mod list;
mod update;

pub use delete::{DeleteDialogState, DeleteProps, DeleteScreen};
pub use detail::{DetailProps, DetailScreen};
pub use list::{BookRow, ListProps, ListScreen};
pub use update::{FormField, UpdateProps, UpdateScreen};

/// Display form of an optional string field: absent renders empty.
fn display_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Display form of an optional numeric field: absent renders empty.
fn display_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Display form of an optional id.
fn display_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
