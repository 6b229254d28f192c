//! HTTP DTOs for thread, comment, and reply endpoints.

use serde::Serialize;

use crate::domain::comment::{AddedComment, Comment};
use crate::domain::reply::{AddedReply, Reply};
use crate::domain::thread::{AddedThread, Thread};

// ════════════════════════════════════════════════════════════════════════════
// Command responses
// ════════════════════════════════════════════════════════════════════════════

/// Added thread as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AddedThreadResponse {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl From<AddedThread> for AddedThreadResponse {
    fn from(thread: AddedThread) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            owner: thread.owner,
        }
    }
}

/// Data payload for the add-thread response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThreadResponse,
}

/// Added comment as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AddedCommentResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<AddedComment> for AddedCommentResponse {
    fn from(comment: AddedComment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            owner: comment.owner,
        }
    }
}

/// Data payload for the add-comment response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedCommentResponse,
}

/// Added reply as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AddedReplyResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<AddedReply> for AddedReplyResponse {
    fn from(reply: AddedReply) -> Self {
        Self {
            id: reply.id,
            content: reply.content,
            owner: reply.owner,
        }
    }
}

/// Data payload for the add-reply response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReplyResponse,
}

// ════════════════════════════════════════════════════════════════════════════
// Thread detail read model
// ════════════════════════════════════════════════════════════════════════════

/// Reply inside the thread detail response. Deleted replies carry the
/// tombstone content the entity layer substituted.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyDetailResponse {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}

impl From<&Reply> for ReplyDetailResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id().to_string(),
            content: reply.content().to_string(),
            date: reply.date().to_string(),
            username: reply.username().to_string(),
        }
    }
}

/// Comment inside the thread detail response.
#[derive(Debug, Clone, Serialize)]
pub struct CommentDetailResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    pub replies: Vec<ReplyDetailResponse>,
    pub content: String,
}

impl From<&Comment> for CommentDetailResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            username: comment.username().to_string(),
            date: comment.date().to_string(),
            replies: comment.replies().iter().map(Into::into).collect(),
            content: comment.content().to_string(),
        }
    }
}

/// Full thread detail with nested comments and replies.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetailResponse>,
}

impl From<&Thread> for ThreadDetailResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id().to_string(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            date: thread.date().to_string(),
            username: thread.username().to_string(),
            comments: thread.comments().iter().map(Into::into).collect(),
        }
    }
}

/// Data payload for the get-thread response.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailData {
    pub thread: ThreadDetailResponse,
}
