//! Employee resource controller.

use crate::{
    extractors::{AppJson, EmployeeIdPath},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use roster_core::ErrorResponse;
use roster_service::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use tracing::debug;

/// Base path of the employee resource.
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// Creates the employee router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees ordered by id", body = [EmployeeResponse])
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<EmployeeResponse>> {
    debug!("List employees request");

    let response = state.employee_service.list_employees().await?;
    ok(response)
}

/// Get an employee by ID.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> ApiResult<EmployeeResponse> {
    debug!("Get employee request: {}", id);

    let response = state.employee_service.get_employee(id).await?;
    ok(response)
}

/// Create a new employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create employee request: {}", request.name);

    let response = state.employee_service.create_employee(request).await?;
    let location = format!("{}/{}", EMPLOYEES_PATH, response.id);
    Ok(created(location, response))
}

/// Replace an employee's fields.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Id mismatch or malformed body", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
    AppJson(request): AppJson<UpdateEmployeeRequest>,
) -> ApiResult<EmployeeResponse> {
    debug!("Update employee request: {}", id);

    let response = state.employee_service.update_employee(id, request).await?;
    ok(response)
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> Result<StatusCode, AppError> {
    debug!("Delete employee request: {}", id);

    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::OK)
}
