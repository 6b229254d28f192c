//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the
//!   authenticated user into request extensions
//! - `RequireAuth` - Extractor that requires authentication
//!
//! The middleware validates access tokens through the
//! `AuthenticationTokenManager` port, so it stays provider-agnostic; the
//! handlers never see token internals.
//!
//! ```text
//! Request -> auth_middleware -> injects AuthenticatedUser into extensions
//!                                      |
//!                              Handler -> RequireAuth extractor reads it
//! ```

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::ports::AuthenticationTokenManager;

/// Auth middleware state - the token manager port.
pub type AuthState = Arc<dyn AuthenticationTokenManager>;

/// The user authenticated by the current request's access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

/// Authentication middleware that validates Bearer access tokens.
///
/// 1. Extracts the Bearer token from the `Authorization` header
/// 2. Verifies it through the token manager port
/// 3. On success, injects [`AuthenticatedUser`] into request extensions
/// 4. On missing token, continues without injecting (public routes)
/// 5. On invalid token, returns 401
pub async fn auth_middleware(
    State(token_manager): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match token_manager.verify_access_token(token).await {
            Ok(claims) => {
                request.extensions_mut().insert(AuthenticatedUser {
                    id: claims.id,
                    username: claims.username,
                });
                next.run(request).await
            }
            Err(err) => {
                tracing::debug!(error = %err, "access token rejected");
                unauthorized("invalid or expired access token")
            }
        },
        None => {
            // No token provided - handlers enforce auth with RequireAuth
            next.run(request).await
        }
    }
}

/// Extractor that fails with 401 unless the request was authenticated.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| unauthorized("authentication is required"))
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "status": "fail", "message": message })),
    )
        .into_response()
}
