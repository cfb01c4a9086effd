//! Tracing subscriber setup.

use roster_config::ObservabilityConfig;
use roster_core::{RosterError, RosterResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},roster={level},tower_http={level},sqlx=warn",
            level = config.log_level
        ))
    })
}

/// Installs the global tracing subscriber.
///
/// Emits JSON lines when `log_format = "json"`, human-readable output otherwise.
pub fn init_logging(config: &ObservabilityConfig) -> RosterResult<()> {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| RosterError::internal(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_uses_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
        };
        let filter = build_filter(&config).to_string();
        assert!(filter.contains("roster=warn"));
        assert!(filter.contains("sqlx=warn"));
    }

    #[test]
    fn test_init_logging_twice_reports_error() {
        let config = ObservabilityConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
