//! JWT implementation of the token manager port.
//!
//! Access and refresh tokens are HS256 JWTs signed with separate keys, so a
//! refresh token can never pass access-token verification and vice versa.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AuthenticationTokenManager, TokenPayload};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    username: String,
    iat: u64,
    exp: u64,
}

impl Claims {
    fn issue(payload: &TokenPayload, age_secs: u64) -> Self {
        let now = Utc::now().timestamp() as u64;
        Self {
            id: payload.id.clone(),
            username: payload.username.clone(),
            iat: now,
            exp: now + age_secs,
        }
    }
}

/// JWT token manager backed by the `auth` configuration section.
pub struct JwtTokenManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_token_age_secs: u64,
    refresh_token_age_secs: u64,
}

impl JwtTokenManager {
    /// Creates a token manager from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let access_key = config.access_token_key.expose_secret().as_bytes();
        let refresh_key = config.refresh_token_key.expose_secret().as_bytes();
        Self {
            access_encoding: EncodingKey::from_secret(access_key),
            access_decoding: DecodingKey::from_secret(access_key),
            refresh_encoding: EncodingKey::from_secret(refresh_key),
            refresh_decoding: DecodingKey::from_secret(refresh_key),
            access_token_age_secs: config.access_token_age_secs,
            refresh_token_age_secs: config.refresh_token_age_secs,
        }
    }

    fn decode_with(&self, token: &str, key: &DecodingKey) -> Result<Claims, DomainError> {
        decode::<Claims>(token, key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| {
                DomainError::new(ErrorCode::InvalidToken, format!("Invalid token: {}", err))
            })
    }
}

#[async_trait]
impl AuthenticationTokenManager for JwtTokenManager {
    async fn create_access_token(&self, payload: &TokenPayload) -> Result<String, DomainError> {
        let claims = Claims::issue(payload, self.access_token_age_secs);
        encode(&Header::default(), &claims, &self.access_encoding).map_err(|err| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to sign access token: {}", err),
            )
        })
    }

    async fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, DomainError> {
        let claims = Claims::issue(payload, self.refresh_token_age_secs);
        encode(&Header::default(), &claims, &self.refresh_encoding).map_err(|err| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to sign refresh token: {}", err),
            )
        })
    }

    async fn verify_access_token(&self, token: &str) -> Result<TokenPayload, DomainError> {
        let claims = self.decode_with(token, &self.access_decoding)?;
        Ok(TokenPayload::new(claims.id, claims.username))
    }

    async fn verify_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        self.decode_with(token, &self.refresh_decoding)?;
        Ok(())
    }

    async fn decode_payload(&self, token: &str) -> Result<TokenPayload, DomainError> {
        let claims = self.decode_with(token, &self.refresh_decoding)?;
        Ok(TokenPayload::new(claims.id, claims.username))
    }
}
