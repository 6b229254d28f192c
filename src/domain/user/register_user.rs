//! Registration payload validator.

use serde_json::Value;

use crate::domain::foundation::{
    string_field, verify_payload, EntityError, FieldType, PayloadViolation,
};

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Inbound payload for registering a new user.
///
/// # Invariants
///
/// - `username` is non-empty, at most 50 characters, `[A-Za-z0-9_]` only
/// - `password` and `fullname` are non-empty strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    const NAMESPACE: &'static str = "REGISTER_USER";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("username", FieldType::String),
        ("password", FieldType::String),
        ("fullname", FieldType::String),
    ];

    /// Validates the payload and constructs the value object.
    ///
    /// # Errors
    ///
    /// - `REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY`
    /// - `REGISTER_USER.NOT_MEET_DATA_TYPE_SPECIFICATION`
    /// - `REGISTER_USER.USERNAME_LIMIT_CHAR` when username exceeds 50 chars
    /// - `REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER` when username
    ///   contains anything outside `[A-Za-z0-9_]`
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;

        let username = string_field(payload, "username");
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(EntityError::new(
                Self::NAMESPACE,
                PayloadViolation::UsernameTooLong,
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(EntityError::new(
                Self::NAMESPACE,
                PayloadViolation::UsernameRestrictedCharacter,
            ));
        }

        Ok(Self {
            username,
            password: string_field(payload, "password"),
            fullname: string_field(payload, "fullname"),
        })
    }
}
