//! Server startup utilities.

use roster_config::StorageBackend;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/

            Employee Resource Store
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, backend: StorageBackend, docs_enabled: bool) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/employees", addr);
    info!("Health:    http://{}/health", addr);
    if docs_enabled {
        info!("API Docs:  http://{}/swagger-ui", addr);
    }
    info!("Storage:   {}", backend);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0:3001", StorageBackend::Sqlite, true);
        print_startup_info("127.0.0.1:8080", StorageBackend::Memory, false);
    }
}
