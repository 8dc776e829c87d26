//! Data Acquisition
//!
//! Reads the dashboard's records from the hosted store and substitutes
//! synthetic data when the store fails or has nothing.
//!
//! ## Architecture
//!
//! - **HealthDataSource**: read-only seam over wherever records live
//! - **StoreClient**: PostgREST implementation of the seam
//! - **SnapshotLoader**: single-attempt acquisition with fallback

mod client;
mod loader;

pub use client::{StoreClient, StoreClientConfig};
pub use loader::{SnapshotLoader, DEFAULT_ALERTS_LIMIT, DEFAULT_METRICS_LIMIT};

use async_trait::async_trait;
use thiserror::Error;

use crate::monitoring::{AlertRecord, MetricRecord};

/// Read-only source of metric and alert records
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Most recent metric records, newest first, at most `limit`
    async fn recent_metrics(&self, limit: usize) -> Result<Vec<MetricRecord>, StoreError>;

    /// Most recent alerts, newest first, at most `limit`
    async fn recent_alerts(&self, limit: usize) -> Result<Vec<AlertRecord>, StoreError>;

    /// Check that the source is reachable
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Errors that can occur when reading from the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Failed to decode {table} rows: {error}")]
    Decode { table: String, error: String },
}

impl StoreError {
    /// Classify a transport-level reqwest failure
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            StoreError::Timeout
        } else if e.is_connect() {
            StoreError::Unavailable
        } else {
            StoreError::Request(e)
        }
    }
}
