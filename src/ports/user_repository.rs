//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{RegisterUser, RegisteredUser};

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fail when the username is already taken.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` when a row with this username exists
    /// - `DatabaseError` on persistence failure
    async fn verify_available_username(&self, username: &str) -> Result<(), DomainError>;

    /// Insert a new user (password already hashed), allocating its id.
    async fn add_user(&self, register_user: &RegisterUser) -> Result<RegisteredUser, DomainError>;

    /// Fetch the stored password hash for a username.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when no row with this username exists
    async fn get_password_by_username(&self, username: &str) -> Result<String, DomainError>;

    /// Fetch the user id for a username.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when no row with this username exists
    async fn get_id_by_username(&self, username: &str) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
