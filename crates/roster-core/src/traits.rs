//! Core traits shared across layers.

use async_trait::async_trait;

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysDown;

    #[async_trait]
    impl HealthCheck for AlwaysDown {
        fn name(&self) -> &str {
            "always-down"
        }

        async fn check(&self) -> HealthStatus {
            HealthStatus::Unhealthy("offline".to_string())
        }
    }

    #[tokio::test]
    async fn test_health_check_object_safe() {
        let check: Box<dyn HealthCheck> = Box::new(AlwaysDown);
        assert_eq!(check.name(), "always-down");
        assert!(!check.check().await.is_healthy());
        assert!(HealthStatus::Healthy.is_healthy());
    }
}
