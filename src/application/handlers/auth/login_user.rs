//! LoginUserUseCase - verifies credentials and issues a token pair.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::domain::auth::NewAuth;
use crate::domain::foundation::ErrorCode;
use crate::domain::user::UserLogin;
use crate::ports::{
    AuthenticationRepository, AuthenticationTokenManager, PasswordHasher, TokenPayload,
    UserRepository,
};

/// Use case for login: validate credentials payload, compare the plaintext
/// against the stored hash, issue access and refresh tokens for
/// `{username, id}`, persist the refresh token.
pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hasher,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<NewAuth, ApplicationError> {
        let login = UserLogin::from_payload(payload)?;

        let encrypted_password = self
            .user_repository
            .get_password_by_username(&login.username)
            .await?;

        self.password_hasher
            .compare_password(&login.password, &encrypted_password)
            .await
            .map_err(|err| match err.code {
                ErrorCode::InvalidCredential => ApplicationError::Authentication(err.message),
                _ => ApplicationError::Infrastructure(err),
            })?;

        let id = self
            .user_repository
            .get_id_by_username(&login.username)
            .await?;

        let claims = TokenPayload::new(id, login.username.clone());
        let access_token = self.token_manager.create_access_token(&claims).await?;
        let refresh_token = self.token_manager.create_refresh_token(&claims).await?;

        self.authentication_repository
            .add_token(&refresh_token)
            .await?;

        Ok(NewAuth::new(access_token, refresh_token))
    }
}
