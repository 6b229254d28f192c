//! PostgreSQL implementation of ThreadRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::DomainError;
use crate::domain::thread::{AddedThread, NewThread, Thread};
use crate::ports::{IdGenerator, ThreadRepository};

use super::{database_error, write_timestamp};

/// PostgreSQL implementation of ThreadRepository.
#[derive(Clone)]
pub struct PostgresThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresThreadRepository {
    /// Creates a new PostgresThreadRepository.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, DomainError> {
        let id = format!("thread-{}", self.id_generator.generate());
        let date = write_timestamp();

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, owner, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .bind(&date)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("Failed to insert thread"))?;

        Ok(AddedThread::new(
            row.try_get("id")
                .map_err(database_error("Failed to get id"))?,
            row.try_get("title")
                .map_err(database_error("Failed to get title"))?,
            row.try_get("owner")
                .map_err(database_error("Failed to get owner"))?,
        ))
    }

    async fn is_thread_exist(&self, thread_id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check thread existence"))?;

        Ok(row.is_some())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Option<Thread>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            INNER JOIN users ON threads.owner = users.id
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("Failed to fetch thread"))?;

        match row {
            Some(row) => Ok(Some(Thread::new(
                row.try_get("id")
                    .map_err(database_error("Failed to get id"))?,
                row.try_get("title")
                    .map_err(database_error("Failed to get title"))?,
                row.try_get("body")
                    .map_err(database_error("Failed to get body"))?,
                row.try_get("date")
                    .map_err(database_error("Failed to get date"))?,
                row.try_get("username")
                    .map_err(database_error("Failed to get username"))?,
            ))),
            None => Ok(None),
        }
    }
}
