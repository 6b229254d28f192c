//! New comment payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound payload for posting a comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

impl NewComment {
    const NAMESPACE: &'static str = "NEW_COMMENT";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("threadId", FieldType::String),
        ("content", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            thread_id: string_field(payload, "threadId"),
            content: string_field(payload, "content"),
            owner: string_field(payload, "owner"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_payload_missing_needed_property() {
        let payload = json!({ "threadId": "thread-123", "content": "dummy content" });
        let err = NewComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_not_meeting_data_type() {
        let payload = json!({ "threadId": "thread-123", "content": 42, "owner": "user-123" });
        let err = NewComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn creates_new_comment_correctly() {
        let payload = json!({
            "threadId": "thread-123",
            "content": "dummy content",
            "owner": "user-123",
        });
        let comment = NewComment::from_payload(&payload).unwrap();
        assert_eq!(comment.thread_id, "thread-123");
        assert_eq!(comment.content, "dummy content");
        assert_eq!(comment.owner, "user-123");
    }
}
