//! User-Facing Error Messages
//!
//! Adapters from [`ApiError`] to the single string a view shows. The API's
//! error payloads are only loosely specified, so every mapping tolerates any
//! shape and falls back to a generic message.

use crate::error::{ApiError, ErrorDetail};

pub const REGISTER_NETWORK_ERROR: &str = "Network error. Please check your connection or server status.";
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
pub const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
pub const REGISTER_SUCCESS: &str = "Registration successful! Please sign in.";

pub const WEBSITE_CONFLICT: &str = "This domain is already registered in your workspace.";
pub const WEBSITE_REJECTED: &str = "Invalid domain format rejected by server.";
pub const WEBSITE_FALLBACK: &str = "Something went wrong. Please try again.";
pub const WEBSITE_NETWORK_ERROR: &str = "Network error. Please check your connection.";

/// Message for a failed `POST /auth/register`
pub fn registration_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => REGISTER_NETWORK_ERROR.to_string(),
        ApiError::Status { detail: ErrorDetail::Message(msg), .. } => msg.clone(),
        ApiError::Status { detail: detail @ ErrorDetail::Validation(_), .. } => {
            let messages = detail.validation_messages();
            if messages.is_empty() {
                REGISTER_FALLBACK.to_string()
            } else {
                messages.join(", ")
            }
        }
        _ => REGISTER_FALLBACK.to_string(),
    }
}

/// Message for a failed `POST /auth/login`
pub fn login_message(err: &ApiError) -> String {
    match err.detail() {
        Some(ErrorDetail::Message(msg)) if !msg.is_empty() => msg.clone(),
        _ => LOGIN_FALLBACK.to_string(),
    }
}

/// Message for a failed `POST /websites/`
pub fn website_create_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network(_) => WEBSITE_NETWORK_ERROR,
        ApiError::Status { status: 409, .. } => WEBSITE_CONFLICT,
        ApiError::Status { status: 400, .. } => WEBSITE_REJECTED,
        _ => WEBSITE_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_string_detail() {
        let err = ApiError::from_response(409, r#"{"detail":"slug already taken"}"#);
        assert_eq!(registration_message(&err), "slug already taken");
    }

    #[test]
    fn test_registration_validation_list() {
        let err = ApiError::from_response(
            422,
            r#"{"detail":[{"msg":"field required"},{"msg":"invalid email"}]}"#,
        );
        assert_eq!(registration_message(&err), "field required, invalid email");
    }

    #[test]
    fn test_registration_no_response() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(registration_message(&err), REGISTER_NETWORK_ERROR);
    }

    #[test]
    fn test_registration_fallbacks() {
        for body in ["", "oops", r#"{"detail":{"code":1}}"#, r#"{"detail":[]}"#, r#"{"detail":[{"loc":[]}]}"#] {
            let err = ApiError::from_response(500, body);
            assert_eq!(registration_message(&err), REGISTER_FALLBACK, "body: {}", body);
        }
        assert_eq!(registration_message(&ApiError::Decode("eof".into())), REGISTER_FALLBACK);
    }

    #[test]
    fn test_login_message() {
        let err = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
        assert_eq!(login_message(&err), "Incorrect email or password");
        let list = ApiError::from_response(422, r#"{"detail":[{"msg":"bad"}]}"#);
        assert_eq!(login_message(&list), LOGIN_FALLBACK);
        assert_eq!(login_message(&ApiError::Network("x".into())), LOGIN_FALLBACK);
    }

    #[test]
    fn test_website_create_message() {
        assert_eq!(website_create_message(&ApiError::from_response(409, "")), WEBSITE_CONFLICT);
        assert_eq!(website_create_message(&ApiError::from_response(400, "")), WEBSITE_REJECTED);
        assert_eq!(website_create_message(&ApiError::from_response(500, "")), WEBSITE_FALLBACK);
        assert_eq!(website_create_message(&ApiError::Network("x".into())), WEBSITE_NETWORK_ERROR);
    }
}
