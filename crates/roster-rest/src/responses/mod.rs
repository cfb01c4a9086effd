//! API response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{ErrorResponse, RosterError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Envelope used by the legacy Express-style routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyResponse<T> {
    pub response: T,
}

impl<T> LegacyResponse<T> {
    /// Wraps a payload.
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

/// Application error type for Axum.
///
/// The rendered [`ErrorResponse`] is also stored in the response extensions
/// so outer middleware can attach the request id.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Self(RosterError::PayloadTooLarge(message)),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Self(RosterError::UnsupportedMediaType(message)),
            _ => Self(RosterError::bad_request(message)),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self(RosterError::bad_request(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self(RosterError::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_client_error() {
            debug!(error = %self.0, "Request rejected");
        } else {
            error!(error = %self.0, "Request failed");
        }

        let error_response = ErrorResponse::from_error(&self.0);
        let mut response = (status, Json(error_response.clone())).into_response();
        response.extensions_mut().insert(error_response);
        response
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response with a `Location` header.
pub fn created<T: Serialize>(location: String, data: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(data))
}
