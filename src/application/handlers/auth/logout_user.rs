//! LogoutUserUseCase - revokes a refresh token.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::ports::AuthenticationRepository;

use super::refresh_token_from_payload;

const NAMESPACE: &str = "DELETE_AUTHENTICATION_USE_CASE";

/// Use case for logout: the token must be in the store before it is removed.
pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), ApplicationError> {
        let refresh_token = refresh_token_from_payload(NAMESPACE, payload)?;

        self.authentication_repository
            .check_token_availability(&refresh_token)
            .await?;
        Ok(self
            .authentication_repository
            .delete_token(&refresh_token)
            .await?)
    }
}
