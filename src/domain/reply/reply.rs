//! Reply read model with soft-delete tombstoning.

use serde_json::Value;

use crate::domain::foundation::{
    bool_field, string_field, verify_payload, EntityError, FieldType,
};

/// Fixed replacement content for a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// A reply as presented on fetch paths.
///
/// Same tombstone rule as [`crate::domain::comment::Comment`], with the
/// reply-specific replacement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    id: String,
    username: String,
    date: String,
    content: String,
    is_delete: bool,
}

impl Reply {
    const NAMESPACE: &'static str = "REPLY";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("username", FieldType::String),
        ("date", FieldType::String),
        ("content", FieldType::String),
        ("isDelete", FieldType::Bool),
    ];

    /// Constructs from already-typed storage columns.
    pub fn new(id: String, username: String, date: String, content: String, is_delete: bool) -> Self {
        let content = if is_delete {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            content
        };
        Self {
            id,
            username,
            date,
            content,
            is_delete,
        }
    }

    /// Validates a field mapping and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self::new(
            string_field(payload, "id"),
            string_field(payload, "username"),
            string_field(payload, "date"),
            string_field(payload, "content"),
            bool_field(payload, "isDelete"),
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_delete(&self) -> bool {
        self.is_delete
    }
}
