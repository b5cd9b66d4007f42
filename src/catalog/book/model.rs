//! Book record — the wire shape exchanged with the gateway.

use serde::{Deserialize, Serialize};

/// A single Book entity.
///
/// Every field is optional: the all-absent default stands for a
/// not-yet-created record. `id` is assigned by the server on create and
/// is immutable for the record's lifetime. Absent fields are omitted
/// from JSON output; on input both omission and `null` are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Book {
    /// True once the record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
