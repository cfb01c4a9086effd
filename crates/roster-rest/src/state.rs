//! Application state for Axum handlers.

use roster_core::HealthCheck;
use roster_service::EmployeeService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    /// Dependencies probed by the readiness endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(employee_service: Arc<dyn EmployeeService>) -> Self {
        Self {
            employee_service,
            health_checks: Vec::new(),
        }
    }

    /// Registers a dependency checked by `/ready`.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
