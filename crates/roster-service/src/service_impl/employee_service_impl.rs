//! Employee service implementation.

use crate::dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::employee_service::EmployeeService;
use async_trait::async_trait;
use roster_core::{EmployeeId, RosterError, RosterResult};
use roster_repository::EmployeeRepository;
use std::sync::Arc;
use tracing::{debug, info};

const RESOURCE: &str = "Employee";

/// Employee service backed by an injected repository.
///
/// Every mutation maps to exactly one repository write; absence is detected
/// from that write's outcome rather than from a preceding read.
pub struct EmployeeServiceImpl {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeServiceImpl {
    /// Creates a new employee service.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for EmployeeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeServiceImpl")
            .field("backend", &self.repository.backend_name())
            .finish()
    }
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    async fn list_employees(&self) -> RosterResult<Vec<EmployeeResponse>> {
        debug!("Listing employees");

        let employees = self.repository.find_all().await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse> {
        debug!("Getting employee: {}", id);

        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found(RESOURCE, id))?;

        Ok(EmployeeResponse::from(employee))
    }

    async fn create_employee(&self, request: CreateEmployeeRequest) -> RosterResult<EmployeeResponse> {
        debug!("Creating employee: {}", request.name);

        let saved = self.repository.insert(&request.into_fields()).await?;

        info!("Employee created: {}", saved.id);
        Ok(EmployeeResponse::from(saved))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        request: UpdateEmployeeRequest,
    ) -> RosterResult<EmployeeResponse> {
        debug!("Updating employee: {}", id);

        if let Some(payload_id) = request.id {
            if payload_id != id {
                return Err(RosterError::bad_request(format!(
                    "Payload id {} does not match addressed id {}",
                    payload_id, id
                )));
            }
        }

        let updated = self
            .repository
            .update(id, &request.into_fields())
            .await?
            .ok_or_else(|| RosterError::not_found(RESOURCE, id))?;

        info!("Employee updated: {}", id);
        Ok(EmployeeResponse::from(updated))
    }

    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()> {
        debug!("Deleting employee: {}", id);

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(RosterError::not_found(RESOURCE, id));
        }

        info!("Employee deleted: {}", id);
        Ok(())
    }

    async fn count_employees(&self) -> RosterResult<u64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use roster_core::{Employee, EmployeeFields};
    use roster_repository::MemoryEmployeeRepository;

    mock! {
        Repository {}

        #[async_trait]
        impl EmployeeRepository for Repository {
            async fn find_all(&self) -> RosterResult<Vec<Employee>>;
            async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>>;
            async fn insert(&self, fields: &EmployeeFields) -> RosterResult<Employee>;
            async fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> RosterResult<Option<Employee>>;
            async fn delete(&self, id: EmployeeId) -> RosterResult<bool>;
            async fn count(&self) -> RosterResult<u64>;
            async fn health_check(&self) -> RosterResult<()>;
            fn backend_name(&self) -> &'static str;
        }
    }

    fn memory_service() -> EmployeeServiceImpl {
        EmployeeServiceImpl::new(Arc::new(MemoryEmployeeRepository::new()))
    }

    fn create_request(name: &str, age: i32, is_active: bool) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: name.to_string(),
            age,
            is_active,
        }
    }

    fn update_request(id: Option<i64>, name: &str, age: i32, is_active: bool) -> UpdateEmployeeRequest {
        UpdateEmployeeRequest {
            id: id.map(EmployeeId::new),
            name: name.to_string(),
            age,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let service = memory_service();
        assert!(service.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = memory_service();

        let created = service
            .create_employee(create_request("Kanishka", 24, true))
            .await
            .unwrap();
        let fetched = service.get_employee(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(service.count_employees().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = memory_service();
        let err = service.get_employee(EmployeeId::new(1)).await.unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_lifecycle_scenario() {
        let service = memory_service();

        let created = service
            .create_employee(create_request("Kanishka", 24, true))
            .await
            .unwrap();
        assert_eq!(created.id, EmployeeId::new(1));

        let updated = service
            .update_employee(created.id, update_request(Some(1), "Kanishka", 25, false))
            .await
            .unwrap();
        assert_eq!(updated.age, 25);
        assert!(!updated.is_active);

        let fetched = service.get_employee(created.id).await.unwrap();
        assert_eq!(fetched.age, 25);
        assert!(!fetched.is_active);

        service.delete_employee(created.id).await.unwrap();
        let err = service.get_employee(created.id).await.unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_id_mismatch_leaves_record_untouched() {
        let service = memory_service();
        let created = service
            .create_employee(create_request("Lahiru", 23, true))
            .await
            .unwrap();

        let err = service
            .update_employee(created.id, update_request(Some(2), "Changed", 99, false))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::BadRequest(_)));

        let stored = service.get_employee(created.id).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let service = memory_service();

        let err = service
            .update_employee(EmployeeId::new(5), update_request(None, "a", 1, true))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));

        let err = service.delete_employee(EmployeeId::new(5)).await.unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_issues_single_write_without_read() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update()
            .withf(|id, fields| *id == EmployeeId::new(1) && fields.age == 25)
            .times(1)
            .returning(|id, fields| Ok(Some(Employee::from_fields(id, fields.clone(), Utc::now()))));

        let service = EmployeeServiceImpl::new(Arc::new(repo));
        let updated = service
            .update_employee(EmployeeId::new(1), update_request(None, "Kanishka", 25, false))
            .await
            .unwrap();

        assert_eq!(updated.age, 25);
    }

    #[tokio::test]
    async fn test_update_mismatch_never_touches_repository() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update().never();

        let service = EmployeeServiceImpl::new(Arc::new(repo));
        let err = service
            .update_employee(EmployeeId::new(1), update_request(Some(3), "a", 1, true))
            .await
            .unwrap_err();

        assert!(matches!(err, RosterError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_issues_single_write_without_read() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = EmployeeServiceImpl::new(Arc::new(repo));
        let err = service.delete_employee(EmployeeId::new(8)).await.unwrap_err();

        assert!(matches!(err, RosterError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(RosterError::Database("disk I/O error".to_string())));

        let service = EmployeeServiceImpl::new(Arc::new(repo));
        let err = service
            .create_employee(create_request("a", 1, true))
            .await
            .unwrap_err();

        assert!(matches!(err, RosterError::Database(_)));
    }
}
