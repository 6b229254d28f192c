//! New thread payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound payload for opening a discussion thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    const NAMESPACE: &'static str = "NEW_THREAD";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("title", FieldType::String),
        ("body", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            title: string_field(payload, "title"),
            body: string_field(payload, "body"),
            owner: string_field(payload, "owner"),
        })
    }
}
