//! PostgreSQL implementation of CommentRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::comment::{AddedComment, Comment, NewComment};
use crate::domain::foundation::DomainError;
use crate::ports::{CommentRepository, IdGenerator};

use super::{database_error, write_timestamp};

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresCommentRepository {
    /// Creates a new PostgresCommentRepository.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, DomainError> {
        let id = format!("comment-{}", self.id_generator.generate());
        let date = write_timestamp();

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, content, owner, thread_id, is_delete, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&new_comment.content)
        .bind(&new_comment.owner)
        .bind(&new_comment.thread_id)
        .bind(false)
        .bind(&date)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("Failed to insert comment"))?;

        Ok(AddedComment::new(
            row.try_get("id")
                .map_err(database_error("Failed to get id"))?,
            row.try_get("content")
                .map_err(database_error("Failed to get content"))?,
            row.try_get("owner")
                .map_err(database_error("Failed to get owner"))?,
        ))
    }

    async fn is_comment_exist(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT id FROM comments WHERE id = $1 AND thread_id = $2")
            .bind(comment_id)
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check comment existence"))?;

        Ok(row.is_some())
    }

    async fn is_comment_owner(&self, comment_id: &str, owner: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to check comment owner"))?;

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

    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_delete = true WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to soft-delete comment"))?;

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT comments.id, comments.content, comments.date, comments.is_delete,
                   users.username
            FROM comments
            INNER JOIN users ON comments.owner = users.id
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("Failed to fetch comments"))?;

        rows.into_iter()
            .map(|row| {
                Ok(Comment::new(
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
