//! Error types and HTTP response conversion
//!
//! Handlers return [`Result`]; the [`IntoResponse`] impl on [`Error`] is the
//! single place where an error value becomes a status code and JSON body.
//!
//! | Error | Status | Code |
//! |---|---|---|
//! | [`Error::Validation`] | 400 | `VALIDATION_ERROR` |
//! | [`Error::Service`] (invalid options) | 400 | `VALIDATION_ERROR` |
//! | [`Error::Service`] (storage failure) | 400 | `SERVICE_ERROR` |
//! | [`Error::NotFound`] | 404 | `NOT_FOUND` |
//! | everything else | 500 | per variant |

use std::collections::BTreeMap;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::author::service::ServiceError;
use crate::filter::FilterError;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Client-facing validation failure with optional per-parameter hints
///
/// # Example
///
/// ```rust
/// use author_service::error::ValidationError;
///
/// let err = ValidationError::new("filter params validation failed", "bool value wrong parameter")
///     .with_param("is_alive", "this field should be boolean: true or false");
/// assert_eq!(err.params.get("is_alive").map(String::as_str),
///            Some("this field should be boolean: true or false"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable message
    pub message: String,
    /// Detail aimed at the API consumer's developer
    pub developer_message: String,
    /// Parameter name to hint
    pub params: BTreeMap<String, String>,
}

impl ValidationError {
    /// Create a validation error without parameter hints
    pub fn new(message: impl Into<String>, developer_message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            developer_message: developer_message.into(),
            params: BTreeMap::new(),
        }
    }

    /// Attach a hint for one parameter
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, hint: impl Into<String>) -> Self {
        self.params.insert(name.into(), hint.into());
        self
    }

    /// Whether a hint exists for `name`
    #[must_use]
    pub fn mentions(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.developer_message)?;
        if !self.params.is_empty() {
            let names: Vec<&str> = self.params.keys().map(String::as_str).collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<FilterError> for ValidationError {
    fn from(err: FilterError) -> Self {
        let developer_message = err.to_string();
        match err {
            FilterError::InvalidValue { field, reason, .. } => {
                Self::new("filter params validation failed", developer_message)
                    .with_param(field, reason)
            }
            FilterError::UnknownOperator(_) => {
                Self::new("filter params validation failed", developer_message)
            }
        }
    }
}

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or disallowed request input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Service or storage failure
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error::Validation(err.into())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,

    /// Developer-oriented detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,

    /// Per-parameter hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            status: status.as_u16(),
            developer_message: None,
            params: None,
        }
    }

    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::new(status, error)
        }
    }

    fn validation(err: ValidationError) -> Self {
        Self {
            developer_message: Some(err.developer_message),
            params: (!err.params.is_empty()).then_some(err.params),
            ..Self::with_code(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.message)
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::Validation(err) | Error::Service(ServiceError::InvalidOptions(err)) => {
                tracing::warn!(params = ?err.params, "Validation error: {}", err);
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(err))
            }

            // Storage failures on the list path share the client-error status.
            Error::Service(err) => {
                tracing::warn!("Service error: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_code(StatusCode::BAD_REQUEST, "SERVICE_ERROR", err.to_string()),
                )
            }

            Error::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_code(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
                )
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        "Service misconfigured",
                    ),
                )
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "IO_ERROR",
                        "I/O operation failed",
                    ),
                )
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DataType;
    use crate::repository::{RepositoryError, RepositoryOperation};

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new(StatusCode::NOT_FOUND, "Author not found");
        assert_eq!(err.status, 404);
        assert_eq!(err.error, "Author not found");
        assert!(err.code.is_none());
        assert!(err.params.is_none());
    }

    #[test]
    fn test_error_response_with_code() {
        let err = ErrorResponse::with_code(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "bad input");
        assert_eq!(err.status, 400);
        assert_eq!(err.code, Some("VALIDATION_ERROR".to_string()));
    }

    #[test]
    fn test_validation_error_display_lists_params() {
        let err = ValidationError::new("filter params validation failed", "bool value wrong parameter")
            .with_param("is_alive", "boolean expected");
        let display = err.to_string();
        assert!(display.contains("bool value wrong parameter"));
        assert!(display.contains("[is_alive]"));
        assert!(err.mentions("is_alive"));
        assert!(!err.mentions("age"));
    }

    #[test]
    fn test_filter_error_into_validation_error() {
        let err: ValidationError = FilterError::InvalidValue {
            field: "age".to_string(),
            data_type: DataType::Int,
            value: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        }
        .into();
        assert!(err.mentions("age"));

        let err: ValidationError = FilterError::UnknownOperator("zz".to_string()).into();
        assert!(err.developer_message.contains("zz"));
        assert!(err.params.is_empty());
    }

    #[test]
    fn test_validation_status() {
        let response = Error::Validation(ValidationError::new("bad", "worse")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_error_status_is_bad_request() {
        let err = ServiceError::ListFailed(RepositoryError::connection_failed(
            RepositoryOperation::FindAll,
            "connection refused",
        ));
        let response = Error::Service(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_and_internal_status() {
        assert_eq!(
            Error::NotFound("author".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
