//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Roster.
///
/// The request variants are classified outcomes of a request. Everything else is a fault of the persistence layer or the process and is
/// reported to the caller unmodified as a server error.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Request Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Malformed or inconsistent input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body larger than the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Body is not declared as JSON
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Request exceeded the configured deadline
    #[error("Request timed out: {0}")]
    Timeout(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::BadRequest(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::UnsupportedMediaType(_) => 415,
            Self::Timeout(_) => 408,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors the client caused.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for RosterError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {}", err))
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request id for correlating with server logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            request_id: None,
        }
    }

    /// Sets the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RosterError::not_found("Employee", 1).status_code(), 404);
        assert_eq!(RosterError::bad_request("id mismatch").status_code(), 400);
        assert_eq!(RosterError::PayloadTooLarge("big".to_string()).status_code(), 413);
        assert_eq!(RosterError::UnsupportedMediaType("text".to_string()).status_code(), 415);
        assert_eq!(RosterError::Timeout("slow".to_string()).status_code(), 408);
        assert_eq!(RosterError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(RosterError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(RosterError::internal("oops").status_code(), 500);
        assert_eq!(RosterError::Other(anyhow::anyhow!("boom")).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::not_found("Employee", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::bad_request("x").error_code(), "BAD_REQUEST");
        assert_eq!(RosterError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(RosterError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_errors() {
        assert!(RosterError::not_found("Employee", 7).is_client_error());
        assert!(RosterError::bad_request("nope").is_client_error());
        assert!(RosterError::PayloadTooLarge("big".to_string()).is_client_error());
        assert!(!RosterError::Database("lost".to_string()).is_client_error());
    }

    #[test]
    fn test_not_found_message_names_resource() {
        let err = RosterError::not_found("Employee", 42);
        let message = err.to_string();
        assert!(message.contains("Employee"));
        assert!(message.contains("42"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_errors_map_to_database() {
        let err = RosterError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");

        let err = RosterError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_response_from_error() {
        let err = RosterError::not_found("Employee", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.request_id.is_none());
    }

    #[test]
    fn test_error_response_with_request_id() {
        let err = RosterError::bad_request("id mismatch");
        let response = ErrorResponse::from(&err).with_request_id("req-123");
        assert_eq!(response.request_id.as_deref(), Some("req-123"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["request_id"], "req-123");
    }
}
