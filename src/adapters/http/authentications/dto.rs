//! HTTP DTOs for authentication endpoints.

use serde::Serialize;

use crate::domain::auth::NewAuth;

/// Token pair issued on login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<NewAuth> for NewAuthData {
    fn from(auth: NewAuth) -> Self {
        Self {
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
        }
    }
}

/// Fresh access token issued on refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedAccessTokenData {
    pub access_token: String,
}
