//! Use-case error types.
//!
//! Failures carry a structured kind (use-case tag + reason) rather than a
//! parsed message string; the dotted codes consumed by the transport
//! translator are rendered by `code()`.

use std::error::Error;
use std::fmt;

use crate::domain::foundation::{DomainError, EntityError};

/// The use case in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    RegisterUser,
    LoginUser,
    RefreshAuthentication,
    LogoutUser,
    AddThread,
    GetThread,
    AddComment,
    DeleteComment,
    AddReply,
    DeleteReply,
}

impl UseCase {
    /// Stable identifier used in error codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::RegisterUser => "REGISTER_USER_USE_CASE",
            UseCase::LoginUser => "LOGIN_USER_USE_CASE",
            UseCase::RefreshAuthentication => "REFRESH_AUTHENTICATION_USE_CASE",
            UseCase::LogoutUser => "LOGOUT_USER_USE_CASE",
            UseCase::AddThread => "ADD_THREAD_USE_CASE",
            UseCase::GetThread => "GET_THREAD_USE_CASE",
            UseCase::AddComment => "ADD_COMMENT_USE_CASE",
            UseCase::DeleteComment => "DELETE_COMMENT_USE_CASE",
            UseCase::AddReply => "ADD_REPLY_USE_CASE",
            UseCase::DeleteReply => "DELETE_REPLY_USE_CASE",
        }
    }
}

/// A resource the authorization pipeline checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Thread,
    Comment,
    Reply,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Thread => "THREAD",
            Resource::Comment => "COMMENT",
            Resource::Reply => "REPLY",
        }
    }
}

/// Failure of a use-case execution.
///
/// Every failure is terminal for the current request; no recovery happens in
/// this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Payload failed entity validation.
    Payload(EntityError),
    /// An ancestor or target resource does not exist.
    NotFound { use_case: UseCase, resource: Resource },
    /// The acting user does not own the target resource.
    NotOwned { use_case: UseCase, resource: Resource },
    /// Credential mismatch during login.
    Authentication(String),
    /// Storage-level precondition violation or infrastructure failure.
    Infrastructure(DomainError),
}

impl ApplicationError {
    /// Renders the structured code, e.g.
    /// `DELETE_COMMENT_USE_CASE.COMMENT_NOT_OWNED`.
    pub fn code(&self) -> String {
        match self {
            ApplicationError::Payload(err) => err.code(),
            ApplicationError::NotFound { use_case, resource } => {
                format!("{}.{}_NOT_FOUND", use_case.as_str(), resource.as_str())
            }
            ApplicationError::NotOwned { use_case, resource } => {
                format!("{}.{}_NOT_OWNED", use_case.as_str(), resource.as_str())
            }
            ApplicationError::Authentication(_) => "AUTHENTICATION_ERROR".to_string(),
            ApplicationError::Infrastructure(err) => err.code.to_string(),
        }
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationError::Authentication(message) => write!(f, "{}", message),
            ApplicationError::Infrastructure(err) => write!(f, "{}", err),
            _ => write!(f, "{}", self.code()),
        }
    }
}

impl Error for ApplicationError {}

impl From<EntityError> for ApplicationError {
    fn from(err: EntityError) -> Self {
        ApplicationError::Payload(err)
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        ApplicationError::Infrastructure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, PayloadViolation};

    #[test]
    fn not_found_renders_use_case_scoped_code() {
        let err = ApplicationError::NotFound {
            use_case: UseCase::AddComment,
            resource: Resource::Thread,
        };
        assert_eq!(err.code(), "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND");
        assert_eq!(err.to_string(), "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND");
    }

    #[test]
    fn not_owned_renders_use_case_scoped_code() {
        let err = ApplicationError::NotOwned {
            use_case: UseCase::DeleteReply,
            resource: Resource::Reply,
        };
        assert_eq!(err.code(), "DELETE_REPLY_USE_CASE.REPLY_NOT_OWNED");
    }

    #[test]
    fn payload_error_keeps_the_entity_code() {
        let err = ApplicationError::Payload(EntityError::new(
            "NEW_COMMENT",
            PayloadViolation::MissingProperty,
        ));
        assert_eq!(err.code(), "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn infrastructure_error_keeps_the_domain_code() {
        let err: ApplicationError =
            DomainError::new(ErrorCode::UsernameTaken, "username not available").into();
        assert_eq!(err.code(), "USERNAME_TAKEN");
    }
}
