//! HTTP routes for thread, comment, and reply endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    delete_comment, delete_reply, get_thread, post_comment, post_reply, post_thread,
    ThreadHandlers,
};

/// Creates the threads router, with comments and replies nested by path.
pub fn thread_routes(handlers: ThreadHandlers) -> Router {
    Router::new()
        .route("/", post(post_thread))
        .route("/:thread_id", get(get_thread))
        .route("/:thread_id/comments", post(post_comment))
        .route("/:thread_id/comments/:comment_id", delete(delete_comment))
        .route("/:thread_id/comments/:comment_id/replies", post(post_reply))
        .route(
            "/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(delete_reply),
        )
        .with_state(handlers)
}
