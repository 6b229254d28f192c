//! New reply payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound payload for replying to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub comment_id: String,
    pub content: String,
    pub owner: String,
}

impl NewReply {
    const NAMESPACE: &'static str = "NEW_REPLY";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("commentId", FieldType::String),
        ("content", FieldType::String),
        ("owner", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            comment_id: string_field(payload, "commentId"),
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
        let payload = json!({ "commentId": "comment-123", "owner": "user-123" });
        let err = NewReply::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_REPLY.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_not_meeting_data_type() {
        let payload = json!({ "commentId": "comment-123", "content": 0.5, "owner": "user-123" });
        let err = NewReply::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn creates_new_reply_correctly() {
        let payload = json!({
            "commentId": "comment-123",
            "content": "a reply",
            "owner": "user-123",
        });
        let reply = NewReply::from_payload(&payload).unwrap();
        assert_eq!(reply.comment_id, "comment-123");
        assert_eq!(reply.content, "a reply");
        assert_eq!(reply.owner, "user-123");
    }
}
