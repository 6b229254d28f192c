//! HTTP routes for user endpoints.

use axum::{routing::post, Router};

use super::handlers::{post_user, UserHandlers};

/// Creates the users router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", post(post_user))
        .with_state(handlers)
}
