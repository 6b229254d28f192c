//! HTTP DTOs for user endpoints.

use serde::Serialize;

use crate::domain::user::RegisteredUser;

/// Registered user as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserResponse {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl From<RegisteredUser> for RegisteredUserResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
        }
    }
}

/// Data payload for the registration response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: RegisteredUserResponse,
}
