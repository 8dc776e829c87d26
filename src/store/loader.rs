//! Snapshot Loader
//!
//! One-shot acquisition of the dashboard data: metrics first, then
//! alerts, each a single attempt. A failed or empty metrics read is
//! replaced by the synthetic month; a failed alerts read leaves no alerts.

use std::sync::Arc;

use super::HealthDataSource;
use crate::monitoring::{generate_synthetic_metrics, DataOrigin, HealthSnapshot};

/// Default number of metric records requested
pub const DEFAULT_METRICS_LIMIT: usize = 30;

/// Default number of alerts requested
pub const DEFAULT_ALERTS_LIMIT: usize = 10;

/// Loads a complete `HealthSnapshot` for one view
#[derive(Clone)]
pub struct SnapshotLoader {
    source: Option<Arc<dyn HealthDataSource>>,
    metrics_limit: usize,
    alerts_limit: usize,
}

impl SnapshotLoader {
    /// Loader backed by a data source
    pub fn new(source: Arc<dyn HealthDataSource>) -> Self {
        Self {
            source: Some(source),
            metrics_limit: DEFAULT_METRICS_LIMIT,
            alerts_limit: DEFAULT_ALERTS_LIMIT,
        }
    }

    /// Loader with no store configured; always serves synthetic data
    pub fn offline() -> Self {
        Self {
            source: None,
            metrics_limit: DEFAULT_METRICS_LIMIT,
            alerts_limit: DEFAULT_ALERTS_LIMIT,
        }
    }

    /// Builder method: set record limits
    pub fn limits(mut self, metrics_limit: usize, alerts_limit: usize) -> Self {
        self.metrics_limit = metrics_limit;
        self.alerts_limit = alerts_limit;
        self
    }

    /// The configured data source, if any
    pub fn source(&self) -> Option<&Arc<dyn HealthDataSource>> {
        self.source.as_ref()
    }

    /// Acquire a snapshot. Never fails: the metric list is always non-empty.
    pub async fn load(&self) -> HealthSnapshot {
        let Some(source) = &self.source else {
            tracing::debug!("No store configured, using synthetic health data");
            return synthetic_snapshot();
        };

        let (metrics, origin) = match source.recent_metrics(self.metrics_limit).await {
            Ok(records) if !records.is_empty() => {
                tracing::debug!(
                    source = source.name(),
                    records = records.len(),
                    "Loaded metric records"
                );
                (records, DataOrigin::Store)
            }
            Ok(_) => {
                tracing::warn!(
                    source = source.name(),
                    "Store returned no metric records, using synthetic data"
                );
                (generate_synthetic_metrics(), DataOrigin::Synthetic)
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "Failed to fetch metric records, using synthetic data"
                );
                (generate_synthetic_metrics(), DataOrigin::Synthetic)
            }
        };

        let alerts = match source.recent_alerts(self.alerts_limit).await {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "Failed to fetch alerts"
                );
                Vec::new()
            }
        };

        HealthSnapshot {
            metrics,
            alerts,
            origin,
        }
    }
}

fn synthetic_snapshot() -> HealthSnapshot {
    HealthSnapshot {
        metrics: generate_synthetic_metrics(),
        alerts: Vec::new(),
        origin: DataOrigin::Synthetic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::{generate_synthetic_metrics_from, AlertRecord, AlertType, MetricRecord};
    use crate::store::StoreError;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source with scripted outcomes
    struct ScriptedSource {
        metrics: Result<Vec<MetricRecord>, ()>,
        alerts: Result<Vec<AlertRecord>, ()>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(
            metrics: Result<Vec<MetricRecord>, ()>,
            alerts: Result<Vec<AlertRecord>, ()>,
        ) -> Arc<Self> {
            Arc::new(Self {
                metrics,
                alerts,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl HealthDataSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn recent_metrics(&self, limit: usize) -> Result<Vec<MetricRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.metrics
                .clone()
                .map(|m| m.into_iter().take(limit).collect())
                .map_err(|_| StoreError::Unavailable)
        }

        async fn recent_alerts(&self, limit: usize) -> Result<Vec<AlertRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.alerts
                .clone()
                .map(|a| a.into_iter().take(limit).collect())
                .map_err(|_| StoreError::Timeout)
        }
    }

    fn stored_metrics(days: usize) -> Vec<MetricRecord> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut records = generate_synthetic_metrics_from(today, &mut rand::rng());
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("row-{}", i);
        }
        records.truncate(days);
        records
    }

    fn unread_alert() -> AlertRecord {
        AlertRecord {
            id: "al-1".to_string(),
            alert_type: AlertType::Warning,
            message: "Blood pressure slightly elevated".to_string(),
            metric_value: Some("135/88".to_string()),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Load once, checking the synthetic month ends on the day of the load
    async fn load_synthetic(loader: &SnapshotLoader) -> HealthSnapshot {
        let before = Utc::now().date_naive();
        let snapshot = loader.load().await;
        let after = Utc::now().date_naive();

        assert_synthetic(&snapshot);
        let newest = snapshot.metrics[0].metric_date;
        assert!(newest >= before && newest <= after);
        snapshot
    }

    fn assert_synthetic(snapshot: &HealthSnapshot) {
        assert_eq!(snapshot.origin, DataOrigin::Synthetic);
        assert_eq!(snapshot.metrics.len(), 30);
        let latest = snapshot.latest().unwrap();
        assert!((65..85).contains(&latest.heart_rate));
        assert!((7000..12000).contains(&latest.steps));
    }

    #[tokio::test]
    async fn test_store_records_are_used() {
        let source = ScriptedSource::new(Ok(stored_metrics(12)), Ok(vec![unread_alert()]));
        let loader = SnapshotLoader::new(source.clone());

        let snapshot = loader.load().await;
        assert_eq!(snapshot.origin, DataOrigin::Store);
        assert_eq!(snapshot.metrics.len(), 12);
        assert_eq!(snapshot.latest().unwrap().id, "row-0");
        assert_eq!(snapshot.alerts.len(), 1);
        // exactly one metrics read and one alerts read
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_store_falls_back() {
        let source = ScriptedSource::new(Err(()), Err(()));
        let snapshot = load_synthetic(&SnapshotLoader::new(source.clone())).await;

        assert!(snapshot.alerts.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_store_falls_back_but_keeps_alerts() {
        let source = ScriptedSource::new(Ok(vec![]), Ok(vec![unread_alert()]));
        let snapshot = load_synthetic(&SnapshotLoader::new(source)).await;

        assert_eq!(snapshot.alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_alert_failure_keeps_store_metrics() {
        let source = ScriptedSource::new(Ok(stored_metrics(30)), Err(()));
        let snapshot = SnapshotLoader::new(source).load().await;

        assert_eq!(snapshot.origin, DataOrigin::Store);
        assert!(snapshot.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_limits_are_passed_to_source() {
        let source = ScriptedSource::new(Ok(stored_metrics(30)), Ok(vec![unread_alert(); 5]));
        let loader = SnapshotLoader::new(source).limits(7, 2);

        let snapshot = loader.load().await;
        assert_eq!(snapshot.metrics.len(), 7);
        assert_eq!(snapshot.alerts.len(), 2);
    }

    #[tokio::test]
    async fn test_offline_loader_is_synthetic() {
        let loader = SnapshotLoader::offline();
        assert!(loader.source().is_none());

        load_synthetic(&loader).await;
        load_synthetic(&loader).await;
    }
}
