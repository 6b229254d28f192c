//! Token pair issued on successful login.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuth {
    const NAMESPACE: &'static str = "NEW_AUTH";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("accessToken", FieldType::String),
        ("refreshToken", FieldType::String),
    ];

    /// Constructs from tokens issued by the token manager.
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    /// Validates a field mapping and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self::new(
            string_field(payload, "accessToken"),
            string_field(payload, "refreshToken"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_payload_missing_needed_property() {
        let payload = json!({ "accessToken": "access_token" });
        let err = NewAuth::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_AUTH.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn rejects_payload_not_meeting_data_type() {
        let payload = json!({ "accessToken": "access_token", "refreshToken": 123 });
        let err = NewAuth::from_payload(&payload).unwrap_err();
        assert_eq!(err.code(), "NEW_AUTH.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn creates_new_auth_correctly() {
        let payload = json!({ "accessToken": "access_token", "refreshToken": "refresh_token" });
        let auth = NewAuth::from_payload(&payload).unwrap();
        assert_eq!(auth.access_token, "access_token");
        assert_eq!(auth.refresh_token, "refresh_token");
    }
}
