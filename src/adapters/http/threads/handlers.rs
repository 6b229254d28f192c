//! HTTP handlers for thread, comment, and reply endpoints.
//!
//! Each handler merges the request body with path parameters and the
//! authenticated user's id into a single field mapping, then hands it to the
//! use case; validation stays in the entity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::{merged_payload, SuccessResponse};
use crate::application::handlers::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadUseCase,
};

use super::dto::{
    AddedCommentData, AddedReplyData, AddedThreadData, ThreadDetailData, ThreadDetailResponse,
};

/// Handler state for the threads resource (threads, comments, replies).
#[derive(Clone)]
pub struct ThreadHandlers {
    add_thread: Arc<AddThreadUseCase>,
    get_thread: Arc<GetThreadUseCase>,
    add_comment: Arc<AddCommentUseCase>,
    delete_comment: Arc<DeleteCommentUseCase>,
    add_reply: Arc<AddReplyUseCase>,
    delete_reply: Arc<DeleteReplyUseCase>,
}

impl ThreadHandlers {
    pub fn new(
        add_thread: Arc<AddThreadUseCase>,
        get_thread: Arc<GetThreadUseCase>,
        add_comment: Arc<AddCommentUseCase>,
        delete_comment: Arc<DeleteCommentUseCase>,
        add_reply: Arc<AddReplyUseCase>,
        delete_reply: Arc<DeleteReplyUseCase>,
    ) -> Self {
        Self {
            add_thread,
            get_thread,
            add_comment,
            delete_comment,
            add_reply,
            delete_reply,
        }
    }
}

/// POST /threads - open a new thread
pub async fn post_thread(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<Value>,
) -> Response {
    let payload = merged_payload(body, &[("owner", &user.id)]);

    match handlers.add_thread.execute(&payload).await {
        Ok(thread) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedThreadData {
                added_thread: thread.into(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// GET /threads/:threadId - fetch a thread with comments and replies
pub async fn get_thread(
    State(handlers): State<ThreadHandlers>,
    Path(thread_id): Path<String>,
) -> Response {
    match handlers.get_thread.execute(&thread_id).await {
        Ok(thread) => (
            StatusCode::OK,
            Json(SuccessResponse::with_data(ThreadDetailData {
                thread: ThreadDetailResponse::from(&thread),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST /threads/:threadId/comments - comment on a thread
pub async fn post_comment(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    Path(thread_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let payload = merged_payload(body, &[("threadId", &thread_id), ("owner", &user.id)]);

    match handlers.add_comment.execute(&payload).await {
        Ok(comment) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedCommentData {
                added_comment: comment.into(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// DELETE /threads/:threadId/comments/:commentId - soft-delete a comment
pub async fn delete_comment(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Response {
    let payload = merged_payload(
        Value::Null,
        &[
            ("id", &comment_id),
            ("threadId", &thread_id),
            ("owner", &user.id),
        ],
    );

    match handlers.delete_comment.execute(&payload).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::empty())).into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST /threads/:threadId/comments/:commentId/replies - reply to a comment
pub async fn post_reply(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let payload = merged_payload(
        body,
        &[
            ("threadId", &thread_id),
            ("commentId", &comment_id),
            ("owner", &user.id),
        ],
    );

    match handlers.add_reply.execute(&payload).await {
        Ok(reply) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedReplyData {
                added_reply: reply.into(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// DELETE /threads/:threadId/comments/:commentId/replies/:replyId -
/// soft-delete a reply
pub async fn delete_reply(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Response {
    let payload = merged_payload(
        Value::Null,
        &[
            ("id", &reply_id),
            ("threadId", &thread_id),
            ("commentId", &comment_id),
            ("owner", &user.id),
        ],
    );

    match handlers.delete_reply.execute(&payload).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::empty())).into_response(),
        Err(err) => error_response(&err),
    }
}
