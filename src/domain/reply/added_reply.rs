//! Added reply value object returned by the reply store.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// A reply as confirmed by storage after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    const NAMESPACE: &'static str = "ADDED_REPLY";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("content", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Constructs from already-typed storage columns.
    pub fn new(id: String, content: String, owner: String) -> Self {
        Self { id, content, owner }
    }

    /// Validates a field mapping and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self::new(
            string_field(payload, "id"),
            string_field(payload, "content"),
            string_field(payload, "owner"),
        ))
    }
}
