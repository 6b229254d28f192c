//! RefreshAuthenticationUseCase - exchanges a refresh token for a new
//! access token.

use std::sync::Arc;

use serde_json::Value;

use crate::application::errors::ApplicationError;
use crate::ports::{AuthenticationRepository, AuthenticationTokenManager};

use super::refresh_token_from_payload;

const NAMESPACE: &str = "REFRESH_AUTHENTICATION_USE_CASE";

/// Use case for token refresh: the token must verify, must still be in the
/// store, and its claims are re-signed into a fresh access token.
pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<String, ApplicationError> {
        let refresh_token = refresh_token_from_payload(NAMESPACE, payload)?;

        self.token_manager
            .verify_refresh_token(&refresh_token)
            .await?;
        self.authentication_repository
            .check_token_availability(&refresh_token)
            .await?;

        let claims = self.token_manager.decode_payload(&refresh_token).await?;
        Ok(self.token_manager.create_access_token(&claims).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::ports::TokenPayload;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockAuthenticationRepository {
        token_stored: bool,
    }

    #[async_trait]
    impl AuthenticationRepository for MockAuthenticationRepository {
        async fn add_token(&self, _token: &str) -> Result<(), DomainError> {
            unreachable!("not used by this use case")
        }

        async fn check_token_availability(&self, _token: &str) -> Result<(), DomainError> {
            if self.token_stored {
                Ok(())
            } else {
                Err(DomainError::new(
                    ErrorCode::TokenNotFound,
                    "refresh token not found in the store",
                ))
            }
        }

        async fn delete_token(&self, _token: &str) -> Result<(), DomainError> {
            unreachable!("not used by this use case")
        }
    }

    struct MockTokenManager {
        verified: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthenticationTokenManager for MockTokenManager {
        async fn create_access_token(
            &self,
            payload: &TokenPayload,
        ) -> Result<String, DomainError> {
            Ok(format!("new_access_token_for_{}", payload.username))
        }

        async fn create_refresh_token(
            &self,
            _payload: &TokenPayload,
        ) -> Result<String, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn verify_access_token(&self, _token: &str) -> Result<TokenPayload, DomainError> {
            unreachable!("not used by this use case")
        }

        async fn verify_refresh_token(&self, token: &str) -> Result<(), DomainError> {
            self.verified.lock().unwrap().push(token.to_string());
            Ok(())
        }

        async fn decode_payload(&self, _token: &str) -> Result<TokenPayload, DomainError> {
            Ok(TokenPayload::new("user-123", "bimantoro"))
        }
    }

    #[tokio::test]
    async fn orchestrates_the_refresh_action_correctly() {
        let tokens = Arc::new(MockTokenManager {
            verified: Mutex::new(Vec::new()),
        });
        let use_case = RefreshAuthenticationUseCase::new(
            Arc::new(MockAuthenticationRepository { token_stored: true }),
            tokens.clone(),
        );

        let payload = json!({ "refreshToken": "refresh_token" });
        let access_token = use_case.execute(&payload).await.unwrap();

        assert_eq!(access_token, "new_access_token_for_bimantoro");
        assert_eq!(
            tokens.verified.lock().unwrap().as_slice(),
            ["refresh_token".to_string()]
        );
    }

    #[tokio::test]
    async fn fails_when_token_is_not_in_the_store() {
        let use_case = RefreshAuthenticationUseCase::new(
            Arc::new(MockAuthenticationRepository {
                token_stored: false,
            }),
            Arc::new(MockTokenManager {
                verified: Mutex::new(Vec::new()),
            }),
        );

        let payload = json!({ "refreshToken": "refresh_token" });
        let err = use_case.execute(&payload).await.unwrap_err();

        assert_eq!(err.code(), "TOKEN_NOT_FOUND");
    }

    #[tokio::test]
    async fn fails_when_payload_has_no_refresh_token() {
        let use_case = RefreshAuthenticationUseCase::new(
            Arc::new(MockAuthenticationRepository { token_stored: true }),
            Arc::new(MockTokenManager {
                verified: Mutex::new(Vec::new()),
            }),
        );

        let err = use_case.execute(&json!({})).await.unwrap_err();

        assert_eq!(
            err.code(),
            "REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN"
        );
    }

    #[tokio::test]
    async fn fails_when_refresh_token_is_not_a_string() {
        let use_case = RefreshAuthenticationUseCase::new(
            Arc::new(MockAuthenticationRepository { token_stored: true }),
            Arc::new(MockTokenManager {
                verified: Mutex::new(Vec::new()),
            }),
        );

        let err = use_case
            .execute(&json!({ "refreshToken": 123 }))
            .await
            .unwrap_err();

        assert_eq!(
            err.code(),
            "REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }
}
