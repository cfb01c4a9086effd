//! Common test infrastructure for database integration tests.

use roster_config::DatabaseConfig;
use roster_repository::DatabasePool;
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with migrations
/// applied, so tests never observe each other's rows.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated in-memory database.
    pub async fn new() -> Self {
        let config = DatabaseConfig::sqlite_in_memory();

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open in-memory SQLite database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}
