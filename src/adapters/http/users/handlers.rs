//! HTTP handlers for user endpoints.

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
use crate::application::handlers::RegisterUserUseCase;

use super::dto::AddedUserData;

/// Handler state for the users resource.
#[derive(Clone)]
pub struct UserHandlers {
    register: Arc<RegisterUserUseCase>,
}

impl UserHandlers {
    pub fn new(register: Arc<RegisterUserUseCase>) -> Self {
        Self { register }
    }
}

/// POST /users - register a new user
pub async fn post_user(
    State(handlers): State<UserHandlers>,
    Json(payload): Json<Value>,
) -> Response {
    match handlers.register.execute(&payload).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(SuccessResponse::with_data(AddedUserData {
                added_user: user.into(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}
