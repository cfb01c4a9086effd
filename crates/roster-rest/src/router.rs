//! Main application router.

use crate::{
    controllers::{employee_controller, health_controller, legacy_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    responses::AppError,
    state::AppState,
};
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    BoxError, Router,
};
use roster_config::ServerConfig;
use roster_core::RosterError;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let mut api_router = Router::new().nest("/employees", employee_controller::router());
    if server_config.legacy_routes {
        api_router = api_router.merge(legacy_controller::router());
    }

    let mut router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        .nest("/api", api_router)
        // Root endpoint
        .route("/", get(root))
        .with_state(state);

    if server_config.docs_enabled {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    // Layers wrap inside-out: the last one added sees the request first.
    let router = router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(server_config.request_timeout()),
        )
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(middleware::from_fn(logging_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!(
        legacy_routes = server_config.legacy_routes,
        docs = server_config.docs_enabled,
        "Router created with employee endpoints at /api/employees"
    );
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Maps errors raised by tower middleware into the common error body.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError(RosterError::Timeout("request exceeded the configured deadline".to_string()))
    } else {
        AppError(RosterError::internal(err.to_string()))
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Roster API"
}
