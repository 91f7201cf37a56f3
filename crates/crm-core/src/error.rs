//! Error Types
//!
//! `ApiError` covers everything that can go wrong talking to the REST API.
//! `CrmError` covers client-side failures (storage, invalid transitions).

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::models::DealStage;

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// One entry of a structured validation failure (`detail: [{ msg, loc, .. }]`)
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub msg: Option<String>,
    pub loc: Vec<String>,
}

impl ValidationIssue {
    fn from_value(value: &Value) -> Self {
        let msg = value.get("msg").and_then(Value::as_str).map(str::to_owned);
        let loc = value
            .get("loc")
            .and_then(Value::as_array)
            .map(|parts| {
                parts
                    .iter()
                    .map(|p| match p {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { msg, loc }
    }
}

/// The `detail` field of an error payload, in whatever shape the server chose
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// `detail` is a plain string
    Message(String),
    /// `detail` is a list of validation entries
    Validation(Vec<ValidationIssue>),
    /// `detail` is present but has some other shape
    Other(Value),
    /// No body, a non-JSON body, or no `detail` key
    Missing,
}

impl ErrorDetail {
    /// Parse the `detail` field out of a raw response body.
    ///
    /// Never fails: unknown shapes land in `Other` or `Missing`.
    pub fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return ErrorDetail::Missing;
        };
        match value.get("detail") {
            None | Some(Value::Null) => ErrorDetail::Missing,
            Some(Value::String(s)) => ErrorDetail::Message(s.clone()),
            Some(Value::Array(items)) => {
                ErrorDetail::Validation(items.iter().map(ValidationIssue::from_value).collect())
            }
            Some(other) => ErrorDetail::Other(other.clone()),
        }
    }

    /// Validation messages with blanks dropped
    pub fn validation_messages(&self) -> Vec<&str> {
        match self {
            ErrorDetail::Validation(issues) => issues
                .iter()
                .filter_map(|i| i.msg.as_deref())
                .filter(|m| !m.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Message(msg) => write!(f, "{}", msg),
            ErrorDetail::Validation(_) => write!(f, "{}", self.validation_messages().join(", ")),
            ErrorDetail::Other(value) => write!(f, "{}", value),
            ErrorDetail::Missing => write!(f, "no detail"),
        }
    }
}

/// Failures of a single API request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response received (offline, CORS, server down)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Request failed with status {status}: {detail}")]
    Status { status: u16, detail: ErrorDetail },

    /// 2xx response whose body did not match the expected schema
    #[error("Response decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response status and its raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: ErrorDetail::from_body(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            ApiError::Status { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// The bearer token was rejected
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Client-side failures outside a single request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrmError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Refusing to store an empty session token")]
    EmptyToken,

    #[error("Invalid stage transition: {from} -> {to}")]
    InvalidTransition { from: DealStage, to: DealStage },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let detail = ErrorDetail::from_body(r#"{"detail":"slug already taken"}"#);
        assert_eq!(detail, ErrorDetail::Message("slug already taken".into()));
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"field required","type":"missing"},
            {"loc":["body",0],"msg":"invalid email"},
            {"loc":["body"]}
        ]}"#;
        let detail = ErrorDetail::from_body(body);
        assert_eq!(detail.validation_messages(), vec!["field required", "invalid email"]);
        match detail {
            ErrorDetail::Validation(issues) => {
                assert_eq!(issues.len(), 3);
                assert_eq!(issues[0].loc, vec!["body", "email"]);
                assert_eq!(issues[1].loc, vec!["body", "0"]);
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_detail_tolerates_drift() {
        assert_eq!(ErrorDetail::from_body(""), ErrorDetail::Missing);
        assert_eq!(ErrorDetail::from_body("<html>502</html>"), ErrorDetail::Missing);
        assert_eq!(ErrorDetail::from_body(r#"{"error":"x"}"#), ErrorDetail::Missing);
        assert_eq!(ErrorDetail::from_body(r#"{"detail":null}"#), ErrorDetail::Missing);
        assert!(matches!(
            ErrorDetail::from_body(r#"{"detail":{"code":7}}"#),
            ErrorDetail::Other(_)
        ));
        assert!(matches!(ErrorDetail::from_body(r#"[1,2]"#), ErrorDetail::Missing));
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::from_response(403, "").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
