//! Added thread value object returned by the thread store.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// A thread as confirmed by storage after insertion. Carries no date; the
/// full read model is materialized only on fetch paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    const NAMESPACE: &'static str = "ADDED_THREAD";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("title", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Constructs from already-typed storage columns.
    pub fn new(id: String, title: String, owner: String) -> Self {
        Self { id, title, owner }
    }

    /// Validates a field mapping and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self::new(
            string_field(payload, "id"),
            string_field(payload, "title"),
            string_field(payload, "owner"),
        ))
    }
}
