//! Translation of use-case failures into HTTP responses.
//!
//! This is the single boundary where structured error kinds become
//! user-facing status codes and messages; nothing upstream formats wire
//! text. The response envelope follows the API's `status`/`message` shape:
//! `fail` for client errors, `error` for server errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::errors::ApplicationError;
use crate::domain::foundation::{EntityError, ErrorCode, PayloadViolation};

/// Error envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

/// Maps a use-case failure to its HTTP response.
pub fn error_response(err: &ApplicationError) -> Response {
    let (status_code, message) = translate(err);
    let status = if status_code.is_server_error() {
        "error"
    } else {
        "fail"
    };
    (status_code, Json(ErrorBody { status, message })).into_response()
}

fn translate(err: &ApplicationError) -> (StatusCode, String) {
    match err {
        ApplicationError::Payload(entity_err) => {
            (StatusCode::BAD_REQUEST, payload_message(entity_err))
        }
        ApplicationError::NotFound { resource, .. } => (
            StatusCode::NOT_FOUND,
            format!("{} not found", resource.as_str().to_lowercase()),
        ),
        ApplicationError::NotOwned { resource, .. } => (
            StatusCode::FORBIDDEN,
            format!(
                "you are not entitled to access this {}",
                resource.as_str().to_lowercase()
            ),
        ),
        ApplicationError::Authentication(message) => {
            (StatusCode::UNAUTHORIZED, message.clone())
        }
        ApplicationError::Infrastructure(domain_err) => match domain_err.code {
            ErrorCode::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                "username is not available".to_string(),
            ),
            ErrorCode::UserNotFound => {
                (StatusCode::BAD_REQUEST, "username not found".to_string())
            }
            ErrorCode::TokenNotFound => (
                StatusCode::BAD_REQUEST,
                "refresh token is not registered".to_string(),
            ),
            ErrorCode::InvalidToken => (
                StatusCode::BAD_REQUEST,
                "refresh token is not valid".to_string(),
            ),
            ErrorCode::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                "the credentials you entered are wrong".to_string(),
            ),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                tracing::error!(error = %domain_err, "request failed on infrastructure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal server error occurred".to_string(),
                )
            }
        },
    }
}

fn payload_message(err: &EntityError) -> String {
    match err.violation() {
        PayloadViolation::MissingProperty => {
            "cannot process the request because a needed property is missing".to_string()
        }
        PayloadViolation::InvalidDataType => {
            "cannot process the request because a property has the wrong data type".to_string()
        }
        PayloadViolation::UsernameTooLong => {
            "cannot create a new user because the username exceeds 50 characters".to_string()
        }
        PayloadViolation::UsernameRestrictedCharacter => {
            "cannot create a new user because the username contains restricted characters"
                .to_string()
        }
        PayloadViolation::CommentsNotArray | PayloadViolation::CommentsInvalidMember => {
            "cannot assemble the thread because its comments are invalid".to_string()
        }
        PayloadViolation::MissingRefreshToken => "a refresh token is required".to_string(),
        PayloadViolation::RefreshTokenNotString => {
            "the refresh token must be a string".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::{Resource, UseCase};
    use crate::domain::foundation::DomainError;

    #[test]
    fn payload_errors_map_to_400() {
        let err = ApplicationError::Payload(EntityError::new(
            "NEW_COMMENT",
            PayloadViolation::MissingProperty,
        ));
        assert_eq!(error_response(&err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApplicationError::NotFound {
            use_case: UseCase::GetThread,
            resource: Resource::Thread,
        };
        assert_eq!(error_response(&err).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_owned_maps_to_403() {
        let err = ApplicationError::NotOwned {
            use_case: UseCase::DeleteComment,
            resource: Resource::Comment,
        };
        assert_eq!(error_response(&err).status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn authentication_failure_maps_to_401() {
        let err = ApplicationError::Authentication("the credentials you entered are wrong".into());
        assert_eq!(error_response(&err).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn username_taken_maps_to_400() {
        let err: ApplicationError =
            DomainError::new(ErrorCode::UsernameTaken, "username is not available").into();
        assert_eq!(error_response(&err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_failure_maps_to_500() {
        let err: ApplicationError = DomainError::new(ErrorCode::DatabaseError, "boom").into();
        assert_eq!(
            error_response(&err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
