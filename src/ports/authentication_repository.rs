//! Refresh token store port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Repository port for the refresh token store.
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Persist a refresh token.
    async fn add_token(&self, token: &str) -> Result<(), DomainError>;

    /// Fail when the token is not in the store.
    ///
    /// # Errors
    ///
    /// - `TokenNotFound` when the token was never persisted or was removed
    async fn check_token_availability(&self, token: &str) -> Result<(), DomainError>;

    /// Remove a refresh token from the store.
    async fn delete_token(&self, token: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AuthenticationRepository) {}
    }
}
