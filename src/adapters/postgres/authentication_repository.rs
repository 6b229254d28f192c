//! PostgreSQL implementation of AuthenticationRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::AuthenticationRepository;

use super::database_error;

/// PostgreSQL implementation of the refresh token store.
#[derive(Clone)]
pub struct PostgresAuthenticationRepository {
    pool: PgPool,
}

impl PostgresAuthenticationRepository {
    /// Creates a new PostgresAuthenticationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PostgresAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to insert token"))?;

        Ok(())
    }

    async fn check_token_availability(&self, token: &str) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check token"))?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::TokenNotFound,
                "refresh token not found in the store",
            )),
        }
    }

    async fn delete_token(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to delete token"))?;

        Ok(())
    }
}
