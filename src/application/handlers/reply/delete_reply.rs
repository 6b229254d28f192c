//! DeleteReplyUseCase - soft-deletes a reply after the full ancestor chain
//! and ownership have been established.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::{ApplicationError, UseCase};
use crate::application::pipeline;
use crate::domain::reply::DeleteReply;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Use case for soft-deleting a reply. The deepest pipeline in the system:
/// thread, comment, reply existence in that order, then reply ownership,
/// then the single mutation.
pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), ApplicationError> {
        let delete_reply = DeleteReply::from_payload(payload)?;

        pipeline::ensure_thread_exists(
            UseCase::DeleteReply,
            self.thread_repository.as_ref(),
            &delete_reply.thread_id,
        )
        .await?;

        pipeline::ensure_comment_exists(
            UseCase::DeleteReply,
            self.comment_repository.as_ref(),
            &delete_reply.comment_id,
            &delete_reply.thread_id,
        )
        .await?;

        pipeline::ensure_reply_exists(
            UseCase::DeleteReply,
            self.reply_repository.as_ref(),
            &delete_reply.id,
            &delete_reply.comment_id,
        )
        .await?;

        pipeline::ensure_reply_owned(
            UseCase::DeleteReply,
            self.reply_repository.as_ref(),
            &delete_reply.id,
            &delete_reply.owner,
        )
        .await?;

        Ok(self.reply_repository.delete_reply(&delete_reply.id).await?)
    }
}
