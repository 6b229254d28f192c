//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::adapters::http::error::error_response;
use crate::adapters::http::SuccessResponse;
use crate::application::handlers::{
    LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase,
};

use super::dto::{NewAuthData, RefreshedAccessTokenData};

/// Handler state for the authentications resource.
#[derive(Clone)]
pub struct AuthenticationHandlers {
    login: Arc<LoginUserUseCase>,
    refresh: Arc<RefreshAuthenticationUseCase>,
    logout: Arc<LogoutUserUseCase>,
}

impl AuthenticationHandlers {
    pub fn new(
        login: Arc<LoginUserUseCase>,
        refresh: Arc<RefreshAuthenticationUseCase>,
        logout: Arc<LogoutUserUseCase>,
    ) -> Self {
        Self {
            login,
            refresh,
            logout,
        }
    }
}

/// POST /authentications - log in
pub async fn post_authentication(
    State(handlers): State<AuthenticationHandlers>,
    Json(payload): Json<Value>,
) -> Response {
    match handlers.login.execute(&payload).await {
        Ok(auth) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(NewAuthData::from(auth))),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// PUT /authentications - refresh the access token
pub async fn put_authentication(
    State(handlers): State<AuthenticationHandlers>,
    Json(payload): Json<Value>,
) -> Response {
    match handlers.refresh.execute(&payload).await {
        Ok(access_token) => (
            StatusCode::OK,
            Json(SuccessResponse::with_data(RefreshedAccessTokenData {
                access_token,
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// DELETE /authentications - log out
pub async fn delete_authentication(
    State(handlers): State<AuthenticationHandlers>,
    Json(payload): Json<Value>,
) -> Response {
    match handlers.logout.execute(&payload).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::empty())).into_response(),
        Err(err) => error_response(&err),
    }
}
