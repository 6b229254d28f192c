//! Added comment value object returned by the comment store.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// A comment as confirmed by storage after insertion.
///
/// Exposes exactly `id`, `content`, and `owner` regardless of any extra
/// columns in the source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    const NAMESPACE: &'static str = "ADDED_COMMENT";
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_payload_missing_needed_property() {
        let payload = json!({ "id": "comment-123", "content": "dummy content" });
        let err = AddedComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_not_meeting_data_type() {
        let payload = json!({ "id": "comment-123", "content": true, "owner": "user-123" });
        let err = AddedComment::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn exposes_exactly_id_content_owner_from_a_row() {
        // Extra row columns are ignored
        let payload = json!({
            "id": "comment-123",
            "content": "dummy content",
            "owner": "user-123",
            "thread_id": "thread-123",
            "is_delete": false,
            "date": "2024-01-01T00:00:00.000Z",
        });
        let comment = AddedComment::from_payload(&payload).unwrap();
        assert_eq!(
            comment,
            AddedComment::new(
                "comment-123".to_string(),
                "dummy content".to_string(),
                "user-123".to_string(),
            )
        );
    }
}
