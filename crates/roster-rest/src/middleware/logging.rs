//! Request logging middleware.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use roster_core::ErrorResponse;
use std::time::Instant;
use tracing::{error, info, warn};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware.
///
/// Logs one line per completed request and stamps the request id into error
/// bodies produced by [`crate::responses::AppError`].
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let request_id_field = request_id.as_deref().unwrap_or("-");

    if status.is_server_error() {
        error!(
            target: "http",
            request_id = %request_id_field,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request failed"
        );
    } else if status.is_client_error() {
        warn!(
            target: "http",
            request_id = %request_id_field,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request rejected"
        );
    } else {
        info!(
            target: "http",
            request_id = %request_id_field,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request completed"
        );
    }

    match request_id {
        Some(id) => attach_request_id(response, id),
        None => response,
    }
}

fn attach_request_id(response: Response, request_id: String) -> Response {
    let (mut parts, body) = response.into_parts();
    let Some(error) = parts.extensions.remove::<ErrorResponse>() else {
        return Response::from_parts(parts, body);
    };

    match serde_json::to_vec(&error.with_request_id(request_id)) {
        Ok(bytes) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => Response::from_parts(parts, body),
    }
}
