//! Delete comment payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound payload for soft-deleting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
}

impl DeleteComment {
    const NAMESPACE: &'static str = "DELETE_COMMENT";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("threadId", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            id: string_field(payload, "id"),
            thread_id: string_field(payload, "threadId"),
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
        let payload = json!({ "id": "comment-123", "threadId": "thread-123" });
        let err = DeleteComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_not_meeting_data_type() {
        let payload = json!({ "id": "comment-123", "threadId": 1, "owner": "user-123" });
        let err = DeleteComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn creates_delete_comment_correctly() {
        let payload = json!({
            "id": "comment-123",
            "threadId": "thread-123",
            "owner": "user-123",
        });
        let delete = DeleteComment::from_payload(&payload).unwrap();
        assert_eq!(delete.id, "comment-123");
        assert_eq!(delete.thread_id, "thread-123");
        assert_eq!(delete.owner, "user-123");
    }
}
