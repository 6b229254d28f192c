//! Authentication use cases.

mod login_user;
mod logout_user;
mod refresh_authentication;

pub use login_user::LoginUserUseCase;
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;

use serde_json::Value;

use crate::domain::foundation::{EntityError, PayloadViolation};

/// Extracts the refresh token from a token-management payload.
///
/// Refresh and logout take a single-field payload rather than a full entity;
/// the same presence-then-type discipline applies.
fn refresh_token_from_payload(
    namespace: &'static str,
    payload: &Value,
) -> Result<String, EntityError> {
    match payload.get("refreshToken") {
        None | Some(Value::Null) => Err(EntityError::new(
            namespace,
            PayloadViolation::MissingRefreshToken,
        )),
        Some(Value::String(token)) if !token.is_empty() => Ok(token.clone()),
        Some(Value::String(_)) => Err(EntityError::new(
            namespace,
            PayloadViolation::MissingRefreshToken,
        )),
        Some(_) => Err(EntityError::new(
            namespace,
            PayloadViolation::RefreshTokenNotString,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_a_present_refresh_token() {
        let payload = json!({ "refreshToken": "refresh_token" });
        let token = refresh_token_from_payload("TEST_USE_CASE", &payload).unwrap();
        assert_eq!(token, "refresh_token");
    }

    #[test]
    fn missing_token_reports_not_contain_refresh_token() {
        let err = refresh_token_from_payload("TEST_USE_CASE", &json!({})).unwrap_err();
        assert_eq!(err.code(), "TEST_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN");
    }

    #[test]
    fn empty_token_reports_not_contain_refresh_token() {
        let err =
            refresh_token_from_payload("TEST_USE_CASE", &json!({ "refreshToken": "" })).unwrap_err();
        assert_eq!(err.code(), "TEST_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN");
    }

    #[test]
    fn wrong_typed_token_reports_data_type_violation() {
        let err = refresh_token_from_payload("TEST_USE_CASE", &json!({ "refreshToken": 123 }))
            .unwrap_err();
        assert_eq!(
            err.code(),
            "TEST_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }
}
