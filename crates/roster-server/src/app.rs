//! Application builder.

use crate::startup::print_startup_info;
use axum::Router;
use roster_config::{AppConfig, DatabaseConfig, StorageBackend};
use roster_core::{RosterError, RosterResult};
use roster_repository::{
    create_pool, DatabasePool, EmployeeRepository, MemoryEmployeeRepository, RepositoryHealthCheck,
    SqlEmployeeRepository,
};
use roster_rest::{create_router, AppState};
use roster_service::{EmployeeService, EmployeeServiceImpl};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// The persistence handle chosen by `database.backend`.
pub struct Storage {
    pub repository: Arc<dyn EmployeeRepository>,
    /// Present for the SQL backend so the pool can be closed on shutdown.
    pub pool: Option<Arc<DatabasePool>>,
}

/// Opens the configured backend, applying migrations when enabled.
pub async fn build_storage(config: &DatabaseConfig) -> RosterResult<Storage> {
    match config.backend {
        StorageBackend::Sqlite => {
            let pool = create_pool(config).await?;
            if config.run_migrations {
                pool.run_migrations().await?;
            }
            let repository = Arc::new(SqlEmployeeRepository::new(Arc::clone(&pool)));
            Ok(Storage {
                repository,
                pool: Some(pool),
            })
        }
        StorageBackend::Memory => {
            info!("Using in-memory employee store; records are lost on restart");
            Ok(Storage {
                repository: Arc::new(MemoryEmployeeRepository::new()),
                pool: None,
            })
        }
    }
}

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Opens storage and assembles the router.
    pub async fn build(self) -> RosterResult<Application> {
        let config = self.config.unwrap_or_default();
        let storage = build_storage(&config.database).await?;

        let employee_service: Arc<dyn EmployeeService> =
            Arc::new(EmployeeServiceImpl::new(Arc::clone(&storage.repository)));
        let state = AppState::new(employee_service)
            .with_health_check(Arc::new(RepositoryHealthCheck::new(storage.repository)));
        let router = create_router(state, &config.server);

        Ok(Application {
            router,
            config,
            pool: storage.pool,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired server, ready to bind.
pub struct Application {
    router: Router,
    config: AppConfig,
    pool: Option<Arc<DatabasePool>>,
}

impl Application {
    /// Returns the HTTP router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serves until `shutdown` resolves, then closes the database pool.
    ///
    /// The pool is closed whether the server stopped cleanly or failed.
    pub async fn run<F>(self, shutdown: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::Internal(format!("Failed to bind REST: {}", e)))?;

        let local_addr = listener
            .local_addr()
            .map_err(|e| RosterError::Internal(format!("Failed to read bound address: {}", e)))?;
        print_startup_info(
            &local_addr.to_string(),
            self.config.database.backend,
            self.config.server.docs_enabled,
        );

        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Some(pool) = self.pool {
            pool.close().await;
        }

        served.map_err(|e| RosterError::Internal(format!("REST server error: {}", e)))?;
        info!("Server shutdown complete");
        Ok(())
    }
}
