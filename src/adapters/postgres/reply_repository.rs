//! PostgreSQL implementation of ReplyRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::DomainError;
use crate::domain::reply::{AddedReply, NewReply, Reply};
use crate::ports::{IdGenerator, ReplyRepository};

use super::{database_error, write_timestamp};

/// PostgreSQL implementation of ReplyRepository.
#[derive(Clone)]
pub struct PostgresReplyRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresReplyRepository {
    /// Creates a new PostgresReplyRepository.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ReplyRepository for PostgresReplyRepository {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, DomainError> {
        let id = format!("reply-{}", self.id_generator.generate());
        let date = write_timestamp();

        let row = sqlx::query(
            r#"
            INSERT INTO replies (id, content, owner, comment_id, is_delete, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&new_reply.content)
        .bind(&new_reply.owner)
        .bind(&new_reply.comment_id)
        .bind(false)
        .bind(&date)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("Failed to insert reply"))?;

        Ok(AddedReply::new(
            row.try_get("id")
                .map_err(database_error("Failed to get id"))?,
            row.try_get("content")
                .map_err(database_error("Failed to get content"))?,
            row.try_get("owner")
                .map_err(database_error("Failed to get owner"))?,
        ))
    }

    async fn is_reply_exist(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT id FROM replies WHERE id = $1 AND comment_id = $2")
            .bind(reply_id)
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check reply existence"))?;

        Ok(row.is_some())
    }

    async fn is_reply_owner(&self, reply_id: &str, owner: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check reply owner"))?;

        match row {
            Some(row) => {
                let stored: String = row
                    .try_get("owner")
                    .map_err(database_error("Failed to get owner"))?;
                Ok(stored == owner)
            }
            None => Ok(false),
        }
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_delete = true WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to soft-delete reply"))?;

        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<Reply>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT replies.id, replies.content, replies.date, replies.is_delete,
                   users.username
            FROM replies
            INNER JOIN users ON replies.owner = users.id
            WHERE replies.comment_id = $1
            ORDER BY replies.date ASC
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("Failed to fetch replies"))?;

        rows.into_iter()
            .map(|row| {
                Ok(Reply::new(
                    row.try_get("id")
                        .map_err(database_error("Failed to get id"))?,
                    row.try_get("username")
                        .map_err(database_error("Failed to get username"))?,
                    row.try_get("date")
                        .map_err(database_error("Failed to get date"))?,
                    row.try_get("content")
                        .map_err(database_error("Failed to get content"))?,
                    row.try_get("is_delete")
                        .map_err(database_error("Failed to get is_delete"))?,
                ))
            })
            .collect()
    }
}
