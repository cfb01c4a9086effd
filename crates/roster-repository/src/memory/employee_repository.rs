//! In-memory employee repository.
//!
//! Models a document collection with a separate sequence counter: the counter
//! only moves forward, so deleting the newest record never frees its id.

use crate::traits::EmployeeRepository;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use roster_core::{Employee, EmployeeFields, EmployeeId, RosterResult};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Collection {
    documents: BTreeMap<EmployeeId, Employee>,
    last_id: i64,
}

/// In-memory employee repository.
#[derive(Debug, Default)]
pub struct MemoryEmployeeRepository {
    collection: RwLock<Collection>,
}

impl MemoryEmployeeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> RosterResult<Vec<Employee>> {
        debug!("Finding all employees");
        Ok(self.collection.read().documents.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>> {
        debug!("Finding employee by id: {}", id);
        Ok(self.collection.read().documents.get(&id).cloned())
    }

    async fn insert(&self, fields: &EmployeeFields) -> RosterResult<Employee> {
        debug!("Inserting employee: {}", fields.name);

        let mut collection = self.collection.write();
        collection.last_id += 1;
        let id = EmployeeId::new(collection.last_id);
        let employee = Employee::from_fields(id, fields.clone(), Utc::now());
        collection.documents.insert(id, employee.clone());

        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> RosterResult<Option<Employee>> {
        debug!("Updating employee: {}", id);

        let mut collection = self.collection.write();
        Ok(collection.documents.get_mut(&id).map(|employee| {
            employee.replace(fields.clone());
            employee.clone()
        }))
    }

    async fn delete(&self, id: EmployeeId) -> RosterResult<bool> {
        debug!("Deleting employee: {}", id);
        Ok(self.collection.write().documents.remove(&id).is_some())
    }

    async fn count(&self) -> RosterResult<u64> {
        Ok(self.collection.read().documents.len() as u64)
    }

    async fn health_check(&self) -> RosterResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, age: i32, is_active: bool) -> EmployeeFields {
        EmployeeFields::new(name, age, is_active)
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = MemoryEmployeeRepository::new();

        let first = repo.insert(&fields("Kanishka", 24, true)).await.unwrap();
        let second = repo.insert(&fields("Lahiru", 23, true)).await.unwrap();

        assert_eq!(first.id, EmployeeId::new(1));
        assert_eq!(second.id, EmployeeId::new(2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MemoryEmployeeRepository::new();
        let first = repo.insert(&fields("Nuwan", 24, false)).await.unwrap();

        assert!(repo.delete(first.id).await.unwrap());
        let next = repo.insert(&fields("Ravidu", 25, true)).await.unwrap();

        assert_eq!(next.id, EmployeeId::new(2));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = MemoryEmployeeRepository::new();
        for name in ["a", "b", "c"] {
            repo.insert(&fields(name, 30, true)).await.unwrap();
        }
        repo.delete(EmployeeId::new(2)).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = MemoryEmployeeRepository::new();
        let result = repo
            .update(EmployeeId::new(9), &fields("Ghost", 1, false))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = MemoryEmployeeRepository::new();
        let created = repo.insert(&fields("Kanishka", 24, true)).await.unwrap();

        let updated = repo
            .update(created.id, &fields("Kanishka", 25, false))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.age, 25);
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = MemoryEmployeeRepository::new();
        assert!(!repo.delete(EmployeeId::new(1)).await.unwrap());
        assert!(repo.health_check().await.is_ok());
        assert_eq!(repo.backend_name(), "memory");
    }
}
