//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// The ways a payload can fail entity validation.
///
/// Presence is always checked before type: a payload that is both missing a
/// field and carries a wrong-typed field reports `MissingProperty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadViolation {
    /// A required field is absent, null, or empty.
    MissingProperty,
    /// A field is present but its primitive type is wrong.
    InvalidDataType,
    /// Username exceeds the 50 character limit.
    UsernameTooLong,
    /// Username contains characters outside `[A-Za-z0-9_]`.
    UsernameRestrictedCharacter,
    /// The comments field of a thread payload is not a sequence.
    CommentsNotArray,
    /// A member of the comments sequence is not a valid comment.
    CommentsInvalidMember,
    /// The refresh token field is absent.
    MissingRefreshToken,
    /// The refresh token field is not a string.
    RefreshTokenNotString,
}

impl PayloadViolation {
    /// Stable identifier for this violation, used in error codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadViolation::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            PayloadViolation::InvalidDataType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            PayloadViolation::UsernameTooLong => "USERNAME_LIMIT_CHAR",
            PayloadViolation::UsernameRestrictedCharacter => {
                "USERNAME_CONTAIN_RESTRICTED_CHARACTER"
            }
            PayloadViolation::CommentsNotArray => "COMMENTS_NOT_ARRAY",
            PayloadViolation::CommentsInvalidMember => "COMMENTS_CONTAINS_INVALID_MEMBER",
            PayloadViolation::MissingRefreshToken => "NOT_CONTAIN_REFRESH_TOKEN",
            PayloadViolation::RefreshTokenNotString => "PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

/// Validation failure raised at entity construction.
///
/// Carries the entity namespace (`NEW_COMMENT`, `THREAD`, ...) and the
/// violation kind; `code()` renders the dotted form consumed by the
/// transport-level error translator, e.g.
/// `NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityError {
    namespace: &'static str,
    violation: PayloadViolation,
}

impl EntityError {
    /// Creates a new entity validation error.
    pub fn new(namespace: &'static str, violation: PayloadViolation) -> Self {
        Self {
            namespace,
            violation,
        }
    }

    /// Returns the entity namespace, e.g. `NEW_COMMENT`.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the violation kind.
    pub fn violation(&self) -> PayloadViolation {
        self.violation
    }

    /// Renders the dotted error code, e.g. `THREAD.COMMENTS_NOT_ARRAY`.
    pub fn code(&self) -> String {
        format!("{}.{}", self.namespace, self.violation.as_str())
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Error for EntityError {}

/// Error codes reported by repository ports and security services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Invariant errors surfaced by storage
    UsernameTaken,
    UserNotFound,
    TokenNotFound,

    // Authentication errors
    InvalidCredential,
    InvalidToken,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::TokenNotFound => "TOKEN_NOT_FOUND",
            ErrorCode::InvalidCredential => "INVALID_CREDENTIAL",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Ports report storage facts with these; orchestrators decide what they mean
/// for the use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_error_renders_dotted_code() {
        let err = EntityError::new("NEW_COMMENT", PayloadViolation::MissingProperty);
        assert_eq!(err.code(), "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
        assert_eq!(format!("{}", err), "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn entity_error_type_violation_renders_dotted_code() {
        let err = EntityError::new("THREAD", PayloadViolation::InvalidDataType);
        assert_eq!(err.code(), "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn entity_error_exposes_namespace_and_violation() {
        let err = EntityError::new("REGISTER_USER", PayloadViolation::UsernameTooLong);
        assert_eq!(err.namespace(), "REGISTER_USER");
        assert_eq!(err.violation(), PayloadViolation::UsernameTooLong);
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::UserNotFound, "username not found");
        assert_eq!(format!("{}", err), "[USER_NOT_FOUND] username not found");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UsernameTaken), "USERNAME_TAKEN");
        assert_eq!(format!("{}", ErrorCode::DatabaseError), "DATABASE_ERROR");
    }
}
