//! Argon2 implementation of the password hashing port.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;
use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

/// Argon2id password hasher with the library's default parameters.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to hash password: {}", err),
                )
            })?;

        Ok(hash.to_string())
    }

    async fn compare_password(&self, plain: &str, hashed: &str) -> Result<(), DomainError> {
        let parsed = PasswordHash::new(hashed).map_err(|err| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Stored password hash is malformed: {}", err),
            )
        })?;

        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidCredential,
                    "the credentials you entered are wrong",
                )
            })
    }
}
