//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (JWT signing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC key for access tokens
    pub access_token_key: SecretString,

    /// HMAC key for refresh tokens
    pub refresh_token_key: SecretString,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_age")]
    pub access_token_age_secs: u64,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_token_age")]
    pub refresh_token_age_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS_TOKEN_KEY"));
        }
        if self.refresh_token_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("REFRESH_TOKEN_KEY"));
        }
        // A shared key would let refresh tokens act as access tokens
        if self.access_token_key.expose_secret() == self.refresh_token_key.expose_secret() {
            return Err(ValidationError::TokenKeysMustDiffer);
        }
        if self.access_token_age_secs == 0 || self.refresh_token_age_secs == 0 {
            return Err(ValidationError::InvalidTokenAge);
        }
        Ok(())
    }
}

fn default_access_token_age() -> u64 {
    3000
}

fn default_refresh_token_age() -> u64 {
    2_592_000
}
