//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{HealthResponse, ReadinessResponse};
use roster_core::{EmployeeId, ErrorResponse};
use roster_service::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "Employee resource store",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Employee endpoints
        crate::controllers::employee_controller::list_employees,
        crate::controllers::employee_controller::get_employee,
        crate::controllers::employee_controller::create_employee,
        crate::controllers::employee_controller::update_employee,
        crate::controllers::employee_controller::delete_employee,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            EmployeeId,
            ErrorResponse,
            CreateEmployeeRequest,
            UpdateEmployeeRequest,
            EmployeeResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "employees", description = "Employee resource endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_employee_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/employees"));
        assert!(doc.paths.paths.contains_key("/api/employees/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
