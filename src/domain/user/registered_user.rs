//! Registered user value object returned by the user store.

use serde_json::Value;

use crate::domain::foundation::{string_field, verify_payload, EntityError, FieldType};

/// A user as confirmed by storage after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    const NAMESPACE: &'static str = "REGISTERED_USER";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("username", FieldType::String),
        ("fullname", FieldType::String),
    ];

    /// Constructs from already-typed storage columns.
    pub fn new(id: String, username: String, fullname: String) -> Self {
        Self {
            id,
            username,
            fullname,
        }
    }

    /// Validates a field mapping and constructs the value object.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;
        Ok(Self::new(
            string_field(payload, "id"),
            string_field(payload, "username"),
            string_field(payload, "fullname"),
        ))
    }
}
