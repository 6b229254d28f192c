//! Delete reply payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound payload for soft-deleting a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub id: String,
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl DeleteReply {
    const NAMESPACE: &'static str = "DELETE_REPLY";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("threadId", FieldType::String),
        ("commentId", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            id: string_field(payload, "id"),
            thread_id: string_field(payload, "threadId"),
            comment_id: string_field(payload, "commentId"),
            owner: string_field(payload, "owner"),
        })
    }
}
