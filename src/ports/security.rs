//! Security service ports - password hashing, token management, id
//! generation.
//!
//! These are opaque services with stated contracts; the use-case layer never
//! sees provider specifics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Claims carried inside access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

impl TokenPayload {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Port for password hashing and verification.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    async fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Compare a plaintext password against a stored hash.
    ///
    /// # Errors
    ///
    /// - `InvalidCredential` on mismatch
    async fn compare_password(&self, plain: &str, hashed: &str) -> Result<(), DomainError>;
}

/// Port for issuing and verifying authentication tokens.
#[async_trait]
pub trait AuthenticationTokenManager: Send + Sync {
    /// Issue a short-lived access token for the given claims.
    async fn create_access_token(&self, payload: &TokenPayload) -> Result<String, DomainError>;

    /// Issue a refresh token for the given claims.
    async fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, DomainError>;

    /// Verify an access token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` when the signature or expiry is invalid
    async fn verify_access_token(&self, token: &str) -> Result<TokenPayload, DomainError>;

    /// Verify a refresh token's signature.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` when the signature is invalid
    async fn verify_refresh_token(&self, token: &str) -> Result<(), DomainError>;

    /// Decode the claims of an already-verified refresh token.
    async fn decode_payload(&self, token: &str) -> Result<TokenPayload, DomainError>;
}

/// Port for allocating unique resource id suffixes.
///
/// Resource ids are formed by repositories as `<kind>-<suffix>`, e.g.
/// `thread-5f3a...`.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_payload_round_trips_through_json() {
        let payload = TokenPayload::new("user-123", "bimantoro");
        let json = serde_json::to_string(&payload).unwrap();
        let back: TokenPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn security_ports_are_object_safe() {
        fn _hasher(_h: &dyn PasswordHasher) {}
        fn _tokens(_t: &dyn AuthenticationTokenManager) {}
        fn _ids(_g: &dyn IdGenerator) {}
    }
}
