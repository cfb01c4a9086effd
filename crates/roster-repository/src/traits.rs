//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Employee, EmployeeFields, EmployeeId, HealthCheck, HealthStatus, RosterResult};
use std::sync::Arc;

/// Employee repository trait.
///
/// Absence is reported through `Option`/`bool`; turning it into a
/// `NotFound` error is the service's job.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns every stored employee ordered by id.
    async fn find_all(&self) -> RosterResult<Vec<Employee>>;

    /// Finds an employee by ID.
    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>>;

    /// Stores a new employee and returns it with its assigned id.
    async fn insert(&self, fields: &EmployeeFields) -> RosterResult<Employee>;

    /// Replaces the mutable fields of an existing employee.
    ///
    /// Returns `None` when no employee has this id.
    async fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> RosterResult<Option<Employee>>;

    /// Deletes an employee by ID. Returns whether a record was removed.
    async fn delete(&self, id: EmployeeId) -> RosterResult<bool>;

    /// Counts all employees.
    async fn count(&self) -> RosterResult<u64>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> RosterResult<()>;

    /// Short name of the backend, used in logs and health output.
    fn backend_name(&self) -> &'static str;
}

/// Exposes a repository as a named [`HealthCheck`].
pub struct RepositoryHealthCheck {
    repository: Arc<dyn EmployeeRepository>,
}

impl RepositoryHealthCheck {
    /// Wraps a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthCheck for RepositoryHealthCheck {
    fn name(&self) -> &str {
        self.repository.backend_name()
    }

    async fn check(&self) -> HealthStatus {
        match self.repository.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
