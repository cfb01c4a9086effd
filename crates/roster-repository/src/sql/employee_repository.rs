//! SQLite employee repository implementation.

use crate::{traits::EmployeeRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use roster_core::{Employee, EmployeeFields, EmployeeId, RosterError, RosterResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQL employee repository implementation.
#[derive(Clone)]
pub struct SqlEmployeeRepository {
    pool: Arc<DatabasePool>,
}

impl SqlEmployeeRepository {
    /// Creates a new SQL employee repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an employee.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    age: i64,
    is_active: i64, // 0/1
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RosterError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let age = i32::try_from(row.age)
            .map_err(|e| RosterError::Internal(format!("Invalid age in database: {}", e)))?;

        Ok(Employee {
            id: EmployeeId::new(row.id),
            name: row.name,
            age,
            is_active: row.is_active != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl EmployeeRepository for SqlEmployeeRepository {
    async fn find_all(&self) -> RosterResult<Vec<Employee>> {
        debug!("Finding all employees");

        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, age, is_active, created_at, updated_at
            FROM employees
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>> {
        debug!("Finding employee by id: {}", id);

        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, age, is_active, created_at, updated_at
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn insert(&self, fields: &EmployeeFields) -> RosterResult<Employee> {
        debug!("Inserting employee: {}", fields.name);

        let now = Utc::now();
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (name, age, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, age, is_active, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(i64::from(fields.age))
        .bind(i64::from(fields.is_active))
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.inner())
        .await?;

        Employee::try_from(row)
    }

    async fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> RosterResult<Option<Employee>> {
        debug!("Updating employee: {}", id);

        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET name = ?, age = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, age, is_active, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(i64::from(fields.age))
        .bind(i64::from(fields.is_active))
        .bind(Utc::now())
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn delete(&self, id: EmployeeId) -> RosterResult<bool> {
        debug!("Deleting employee: {}", id);

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RosterResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn health_check(&self) -> RosterResult<()> {
        self.pool.health_check().await
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
