//! Error types for the EoneoPay SDK
//!
//! Every fallible operation in this crate returns [`Result`], whose error type is
//! [`SdkError`]. Errors raised by the payments API are first surfaced by the
//! execution engine as [`SdkError::InvalidApiResponse`] and then turned into one of
//! the typed variants (`Validation`, `Client`, `Critical`, `Runtime`) by an
//! [`ExceptionFactory`](crate::manager::ExceptionFactory).

use crate::validation::Violations;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors produced by the SDK
#[derive(Debug, Error)]
pub enum SdkError {
    /// Unrecoverable failure reported by the payments service (5xx)
    #[error("Critical error: {message} (code {code}, sub code {sub_code})")]
    Critical {
        message: String,
        code: i64,
        sub_code: i64,
    },

    /// Failure that could not be classified any further
    #[error("Runtime error: {message} (code {code}, sub code {sub_code})")]
    Runtime {
        message: String,
        code: i64,
        sub_code: i64,
    },

    /// The payments service rejected the request (4xx)
    #[error("Client error ({status}): {message} (code {code}, sub code {sub_code})")]
    Client {
        message: String,
        code: i64,
        sub_code: i64,
        status: u16,
    },

    /// The entity failed validation, locally or on the server
    #[error("{message}")]
    Validation {
        message: String,
        violations: Violations,
    },

    /// A webhook payload was parsed but did not validate
    #[error("{message}")]
    WebhookValidation {
        message: String,
        violations: Violations,
    },

    /// Raw non-success response from the execution engine
    #[error("Invalid API response with status {status}: {body}")]
    InvalidApiResponse { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a critical error
    pub fn critical(message: impl Into<String>, code: i64, sub_code: i64) -> Self {
        Self::Critical {
            message: message.into(),
            code,
            sub_code,
        }
    }

    /// Create a runtime error
    pub fn runtime(message: impl Into<String>, code: i64, sub_code: i64) -> Self {
        Self::Runtime {
            message: message.into(),
            code,
            sub_code,
        }
    }

    /// Create a client error
    pub fn client(message: impl Into<String>, code: i64, sub_code: i64, status: u16) -> Self {
        Self::Client {
            message: message.into(),
            code,
            sub_code,
            status,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>, violations: Violations) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    /// Create a webhook validation error
    pub fn webhook_validation(violations: Violations) -> Self {
        Self::WebhookValidation {
            message: "The webhook parser failed to validate the parsed entity.".to_string(),
            violations,
        }
    }

    /// Error code reported by the API, zero when the error did not come from it
    pub fn code(&self) -> i64 {
        match self {
            Self::Critical { code, .. } | Self::Runtime { code, .. } | Self::Client { code, .. } => {
                *code
            }
            _ => 0,
        }
    }

    /// Error sub code reported by the API, zero when absent
    pub fn sub_code(&self) -> i64 {
        match self {
            Self::Critical { sub_code, .. }
            | Self::Runtime { sub_code, .. }
            | Self::Client { sub_code, .. } => *sub_code,
            _ => 0,
        }
    }

    /// Field violations carried by validation errors
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation { violations, .. } | Self::WebhookValidation { violations, .. } => {
                Some(violations)
            }
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } | Self::InvalidApiResponse { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = SdkError::critical("Gateway down", 6000, 3);
        assert_eq!(error.code(), 6000);
        assert_eq!(error.sub_code(), 3);
        assert_eq!(
            error.to_string(),
            "Critical error: Gateway down (code 6000, sub code 3)"
        );

        let error = SdkError::config("missing base uri");
        assert_eq!(error.code(), 0);
        assert_eq!(error.sub_code(), 0);
    }

    #[test]
    fn test_client_error_status() {
        let error = SdkError::client("Not found", 1100, 1, 404);
        assert_eq!(error.status(), Some(404));
        assert!(error.to_string().contains("Not found"));
    }

    #[test]
    fn test_webhook_validation_message() {
        let mut violations = Violations::new();
        violations.add("amount", "A value was not provided.");

        let error = SdkError::webhook_validation(violations);
        assert_eq!(
            error.to_string(),
            "The webhook parser failed to validate the parsed entity."
        );
        assert_eq!(error.violations().map(Violations::len), Some(1));
    }
}
