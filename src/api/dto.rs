//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::monitoring::{DashboardView, DataOrigin, MetricKind, MetricRecord};

// ============================================
// DASHBOARD DTOs
// ============================================

/// Derived dashboard response
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// When the view was derived
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub dashboard: DashboardView,
}

// ============================================
// METRIC DTOs
// ============================================

/// Metric list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MetricsParams {
    /// Project the records onto a single series
    #[serde(default)]
    pub series: Option<MetricKind>,
}

/// Raw metric records, newest first
#[derive(Debug, Serialize)]
pub struct MetricListResponse {
    pub origin: DataOrigin,
    pub total: usize,
    pub records: Vec<MetricRecord>,
}

/// One metric projected across the records, newest first
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub origin: DataOrigin,
    pub metric: MetricKind,
    pub unit: String,
    pub values: Vec<f64>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Store status: ok, unreachable, not_configured
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
