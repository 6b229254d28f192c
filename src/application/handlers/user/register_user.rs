//! RegisterUserUseCase - creates a new user account.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::domain::user::{RegisterUser, RegisteredUser};
use crate::ports::{PasswordHasher, UserRepository};

/// Use case for registration: validate the payload, reserve the username,
/// hash the password, persist.
pub struct RegisterUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<RegisteredUser, ApplicationError> {
        let register_user = RegisterUser::from_payload(payload)?;

        self.user_repository
            .verify_available_username(&register_user.username)
            .await?;

        let password = self.password_hasher.hash(&register_user.password).await?;
        let register_user = RegisterUser {
            password,
            ..register_user
        };

        Ok(self.user_repository.add_user(&register_user).await?)
    }
}
