//! Login credentials payload validator.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// Inbound credentials for logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    const NAMESPACE: &'static str = "USER_LOGIN";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("username", FieldType::String),
        ("password", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self {
            username: string_field(payload, "username"),
            password: string_field(payload, "password"),
        })
    }
}
