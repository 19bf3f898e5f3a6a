//! Wire and outcome types for the registration endpoint

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Body of the registration request
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

// Passwords must never reach the logs
impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("password_confirm", &"<redacted>")
            .finish()
    }
}

/// Result of a request that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The service accepted the registration
    Registered,
    /// The service refused it, optionally explaining why
    Rejected { message: Option<String> },
}

/// Failure before any response was received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),
}

impl TransportError {
    /// Message to show the user
    pub fn message(&self) -> &str {
        match self {
            TransportError::Request(message) => message,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

/// Error body returned by the service on failure
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: serde_json::Value,
}

impl ErrorBody {
    /// The server's message as display text.
    ///
    /// Strings are taken as-is; numbers and booleans are stringified.
    /// Empty strings, zero, `false`, null and structured values yield `None`.
    pub fn message_text(&self) -> Option<String> {
        use serde_json::Value;

        match &self.message {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_request() -> RegistrationRequest {
        RegistrationRequest {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            password: "hunter22".to_string(),
            password_confirm: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_request_uses_wire_names() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "ada@example.com",
                "name": "Ada",
                "password": "hunter22",
                "passwordConfirm": "hunter22",
            })
        );
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let debug_str = format!("{:?}", sample_request());
        assert!(debug_str.contains("ada@example.com"));
        assert!(!debug_str.contains("hunter22"));
    }

    fn message_of(json: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(json).unwrap().message_text()
    }

    #[test]
    fn test_error_body_with_message() {
        assert_eq!(
            message_of(r#"{"message": "Email already taken"}"#).as_deref(),
            Some("Email already taken")
        );
    }

    #[test]
    fn test_error_body_without_message() {
        assert!(message_of(r#"{"code": 409}"#).is_none());
        assert!(message_of(r#"{"message": null}"#).is_none());
        assert!(message_of(r#"{"message": ""}"#).is_none());
    }

    #[test]
    fn test_error_body_scalar_message_is_stringified() {
        assert_eq!(message_of(r#"{"message": 42}"#).as_deref(), Some("42"));
        assert_eq!(message_of(r#"{"message": 1.5}"#).as_deref(), Some("1.5"));
        assert_eq!(message_of(r#"{"message": true}"#).as_deref(), Some("true"));
    }

    #[test]
    fn test_error_body_falsy_or_structured_message_is_absent() {
        assert!(message_of(r#"{"message": 0}"#).is_none());
        assert!(message_of(r#"{"message": false}"#).is_none());
        assert!(message_of(r#"{"message": ["taken"]}"#).is_none());
        assert!(message_of(r#"{"message": {"text": "taken"}}"#).is_none());
    }

    #[test]
    fn test_transport_error_display_is_message() {
        let err = TransportError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.message(), "connection refused");
    }
}
