//! Comment read model with soft-delete tombstoning.

use serde_json::Value;

use crate::domain::foundation::{
    bool_field, string_field, verify_payload, EntityError, FieldType,
};
use crate::domain::reply::Reply;

/// Fixed replacement content for a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// A comment as presented on fetch paths.
///
/// # Invariants
///
/// When `is_delete` is true the exposed content is the fixed tombstone
/// string. The substitution happens exactly once, at construction; the
/// original content is irrecoverable from this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: String,
    username: String,
    date: String,
    content: String,
    is_delete: bool,
    replies: Vec<Reply>,
}

impl Comment {
    const NAMESPACE: &'static str = "COMMENT";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("username", FieldType::String),
        ("date", FieldType::String),
        ("content", FieldType::String),
        ("isDelete", FieldType::Bool),
    ];

    /// Constructs from already-typed storage columns, with no replies.
    pub fn new(id: String, username: String, date: String, content: String, is_delete: bool) -> Self {
        let content = if is_delete {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            content
        };
        Self {
            id,
            username,
            date,
            content,
            is_delete,
            replies: Vec::new(),
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

    /// Attaches the reply list, returning the hydrated comment.
    pub fn with_replies(mut self, replies: Vec<Reply>) -> Self {
        self.replies = replies;
        self
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

    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }
}
