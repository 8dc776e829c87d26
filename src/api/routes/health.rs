//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// The page renders from synthetic data without the store, so the
/// service is ready as soon as it is listening.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with store reachability.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store_status = check_store_health(&state).await;

    let overall_status = match store_status {
        StoreStatus::Unreachable => "degraded",
        StoreStatus::Ok | StoreStatus::NotConfigured => "healthy",
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        store: store_status.as_str().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreStatus {
    Ok,
    Unreachable,
    NotConfigured,
}

impl StoreStatus {
    fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Ok => "ok",
            StoreStatus::Unreachable => "unreachable",
            StoreStatus::NotConfigured => "not_configured",
        }
    }
}

async fn check_store_health(state: &AppState) -> StoreStatus {
    let Some(source) = state.loader.source() else {
        return StoreStatus::NotConfigured;
    };

    match source.health_check().await {
        Ok(()) => StoreStatus::Ok,
        Err(e) => {
            tracing::warn!(source = source.name(), error = %e, "Store health check failed");
            StoreStatus::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::monitoring::{AlertRecord, MetricRecord};
    use crate::store::{HealthDataSource, SnapshotLoader, StoreError};
    use async_trait::async_trait;

    struct DownSource;

    #[async_trait]
    impl HealthDataSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn recent_metrics(&self, _limit: usize) -> Result<Vec<MetricRecord>, StoreError> {
            Err(StoreError::Unavailable)
        }

        async fn recent_alerts(&self, _limit: usize) -> Result<Vec<AlertRecord>, StoreError> {
            Err(StoreError::Unavailable)
        }

        async fn health_check(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_offline_store_is_not_configured() {
        let state = Arc::new(AppState::new(SnapshotLoader::offline(), ApiConfig::default()));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.store, "not_configured");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_degraded() {
        let loader = SnapshotLoader::new(Arc::new(DownSource));
        let state = Arc::new(AppState::new(loader, ApiConfig::default()));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "degraded");
        assert_eq!(health.store, "unreachable");
    }
}
