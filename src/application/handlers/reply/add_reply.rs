//! AddReplyUseCase - posts a reply on an existing comment.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::{ApplicationError, UseCase};
use crate::application::pipeline;
use crate::domain::foundation::string_field;
use crate::domain::reply::{AddedReply, NewReply};
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Use case for posting a reply. The ancestor chain (thread, then comment
/// scoped to the thread) is established from the raw payload before the
/// payload itself is validated; an absent ancestor id reads as a missing
/// ancestor, not a validation failure.
pub struct AddReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddReplyUseCase {
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

    pub async fn execute(&self, payload: &Value) -> Result<AddedReply, ApplicationError> {
        let thread_id = string_field(payload, "threadId");
        let comment_id = string_field(payload, "commentId");

        pipeline::ensure_thread_exists(
            UseCase::AddReply,
            self.thread_repository.as_ref(),
            &thread_id,
        )
        .await?;

        pipeline::ensure_comment_exists(
            UseCase::AddReply,
            self.comment_repository.as_ref(),
            &comment_id,
            &thread_id,
        )
        .await?;

        let new_reply = NewReply::from_payload(payload)?;

        Ok(self.reply_repository.add_reply(&new_reply).await?)
    }
}
