//! Employee service trait definition.

use crate::dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use async_trait::async_trait;
use roster_core::{EmployeeId, RosterResult};

/// Employee service trait.
///
/// Concurrent updates to the same id are last-write-wins.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Lists every employee ordered by id.
    async fn list_employees(&self) -> RosterResult<Vec<EmployeeResponse>>;

    /// Gets an employee by ID.
    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse>;

    /// Creates a new employee with a server-assigned id.
    async fn create_employee(&self, request: CreateEmployeeRequest) -> RosterResult<EmployeeResponse>;

    /// Replaces the fields of an existing employee.
    ///
    /// Fails with `BadRequest` when the payload carries a different id.
    async fn update_employee(
        &self,
        id: EmployeeId,
        request: UpdateEmployeeRequest,
    ) -> RosterResult<EmployeeResponse>;

    /// Deletes an employee.
    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()>;

    /// Counts live employees.
    async fn count_employees(&self) -> RosterResult<u64>;
}
