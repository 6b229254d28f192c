//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    delete_authentication, post_authentication, put_authentication, AuthenticationHandlers,
};

/// Creates the authentications router.
pub fn authentication_routes(handlers: AuthenticationHandlers) -> Router {
    Router::new()
        .route(
            "/",
            post(post_authentication)
                .put(put_authentication)
                .delete(delete_authentication),
        )
        .with_state(handlers)
}
