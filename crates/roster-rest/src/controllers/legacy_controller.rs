//! Express-style user routes kept for older frontends.
//!
//! Success bodies are wrapped as `{"response": ...}`. Ids travel in the
//! `?id=` query string and every mutation is a `POST`.

use crate::{
    extractors::{AppJson, EmployeeIdQuery},
    responses::{AppError, LegacyResponse},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use roster_service::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use serde::Serialize;
use tracing::debug;

/// Outcome of a legacy delete, shaped like a document-store delete result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

type LegacyResult<T> = Result<Json<LegacyResponse<T>>, AppError>;

/// Creates the legacy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/createuser", post(create_user))
        .route("/updateuser", post(update_user))
        .route("/deleteuser", post(delete_user))
}

async fn get_users(State(state): State<AppState>) -> LegacyResult<Vec<EmployeeResponse>> {
    debug!("Legacy list request");

    let users = state.employee_service.list_employees().await?;
    Ok(Json(LegacyResponse::new(users)))
}

async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<LegacyResponse<EmployeeResponse>>), AppError> {
    debug!("Legacy create request: {}", request.name);

    let user = state.employee_service.create_employee(request).await?;
    Ok((StatusCode::CREATED, Json(LegacyResponse::new(user))))
}

async fn update_user(
    State(state): State<AppState>,
    EmployeeIdQuery(id): EmployeeIdQuery,
    AppJson(request): AppJson<UpdateEmployeeRequest>,
) -> LegacyResult<EmployeeResponse> {
    debug!("Legacy update request: {}", id);

    let user = state.employee_service.update_employee(id, request).await?;
    Ok(Json(LegacyResponse::new(user)))
}

async fn delete_user(
    State(state): State<AppState>,
    EmployeeIdQuery(id): EmployeeIdQuery,
) -> LegacyResult<DeleteResult> {
    debug!("Legacy delete request: {}", id);

    state.employee_service.delete_employee(id).await?;
    Ok(Json(LegacyResponse::new(DeleteResult { deleted_count: 1 })))
}
