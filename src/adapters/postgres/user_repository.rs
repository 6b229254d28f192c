//! PostgreSQL implementation of UserRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{RegisterUser, RegisteredUser};
use crate::ports::{IdGenerator, UserRepository};

use super::database_error;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn verify_available_username(&self, username: &str) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT username FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check username availability"))?;

        match row {
            Some(_) => Err(DomainError::new(
                ErrorCode::UsernameTaken,
                "username is not available",
            )),
            None => Ok(()),
        }
    }

    async fn add_user(&self, register_user: &RegisterUser) -> Result<RegisteredUser, DomainError> {
        let id = format!("user-{}", self.id_generator.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(&id)
        .bind(&register_user.username)
        .bind(&register_user.password)
        .bind(&register_user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("Failed to insert user"))?;

        Ok(RegisteredUser::new(
            row.try_get("id")
                .map_err(database_error("Failed to get id"))?,
            row.try_get("username")
                .map_err(database_error("Failed to get username"))?,
            row.try_get("fullname")
                .map_err(database_error("Failed to get fullname"))?,
        ))
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, DomainError> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to fetch password"))?;

        match row {
            Some(row) => row
                .try_get("password")
                .map_err(database_error("Failed to get password")),
            None => Err(DomainError::new(
                ErrorCode::UserNotFound,
                "username not found",
            )),
        }
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, DomainError> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to fetch user id"))?;

        match row {
            Some(row) => row
                .try_get("id")
                .map_err(database_error("Failed to get id")),
            None => Err(DomainError::new(
                ErrorCode::UserNotFound,
                "username not found",
            )),
        }
    }
}
