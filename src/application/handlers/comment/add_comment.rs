//! AddCommentUseCase - posts a comment on an existing thread.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::application::errors::UseCase;
use crate::application::pipeline;
use crate::domain::comment::{AddedComment, NewComment};
use crate::ports::{CommentRepository, ThreadRepository};

/// Use case for posting a comment: validate the payload, establish that the
/// parent thread exists, then perform the effect.
pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, ApplicationError> {
        let new_comment = NewComment::from_payload(payload)?;

        pipeline::ensure_thread_exists(
            UseCase::AddComment,
            self.thread_repository.as_ref(),
            &new_comment.thread_id,
        )
        .await?;

        Ok(self.comment_repository.add_comment(&new_comment).await?)
    }
}
