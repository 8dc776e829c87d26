//! Dashboard View
//!
//! Derives everything the monitoring section displays from a
//! `HealthSnapshot`: the latest reading, weekly trends, sparklines,
//! goal progress and the unread alerts.

use serde::Serialize;

use super::sparkline::Sparkline;
use super::trend::Trend;
use super::types::{AlertRecord, DataOrigin, HealthSnapshot, MetricKind, MetricRecord};

/// Sparkline stroke colours
pub const HEART_RATE_COLOR: &str = "#ef4444";
pub const BLOOD_PRESSURE_COLOR: &str = "#3b82f6";
pub const BLOOD_GLUCOSE_COLOR: &str = "#10b981";
pub const WEIGHT_COLOR: &str = "#8b5cf6";

/// Daily goals used for the progress bars
pub const STEPS_GOAL: f64 = 10_000.0;
pub const SLEEP_GOAL_HOURS: f64 = 8.0;
pub const WATER_GOAL_LITRES: f64 = 3.0;

/// Trends shown on the dashboard cards
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardTrends {
    pub heart_rate: Trend,
    pub weight: Trend,
    pub steps: Trend,
}

/// Sparklines shown on the vital-sign cards
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSparklines {
    pub heart_rate: Option<Sparkline>,
    pub blood_pressure: Option<Sparkline>,
    pub blood_glucose: Option<Sparkline>,
    pub weight: Option<Sparkline>,
}

/// Progress towards daily goals, each in 0..=100
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GoalProgress {
    pub steps_percent: f64,
    pub sleep_percent: f64,
    pub water_percent: f64,
}

/// Fully derived dashboard, ready to render or serialize
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub origin: DataOrigin,
    pub record_count: usize,
    pub latest: Option<MetricRecord>,
    pub trends: DashboardTrends,
    pub sparklines: DashboardSparklines,
    pub progress: GoalProgress,
    /// Unread alerts only, newest first
    pub alerts: Vec<AlertRecord>,
}

impl DashboardView {
    /// Derive the view from an acquired snapshot
    pub fn derive(snapshot: &HealthSnapshot) -> Self {
        let records = &snapshot.metrics;

        let heart_rates = MetricKind::HeartRate.series(records);
        let weights = MetricKind::Weight.series(records);
        let steps = MetricKind::Steps.series(records);

        let trends = DashboardTrends {
            heart_rate: Trend::of(&heart_rates),
            weight: Trend::of(&weights),
            steps: Trend::of(&steps),
        };

        let sparklines = DashboardSparklines {
            heart_rate: Sparkline::from_series(&heart_rates, HEART_RATE_COLOR),
            blood_pressure: Sparkline::from_series(
                &MetricKind::BloodPressureSystolic.series(records),
                BLOOD_PRESSURE_COLOR,
            ),
            blood_glucose: Sparkline::from_series(
                &MetricKind::BloodGlucose.series(records),
                BLOOD_GLUCOSE_COLOR,
            ),
            weight: Sparkline::from_series(&weights, WEIGHT_COLOR),
        };

        let latest = snapshot.latest().cloned();
        let progress = GoalProgress::for_record(latest.as_ref());

        Self {
            origin: snapshot.origin,
            record_count: records.len(),
            latest,
            trends,
            sparklines,
            progress,
            alerts: snapshot.unread_alerts().cloned().collect(),
        }
    }
}

impl GoalProgress {
    fn for_record(record: Option<&MetricRecord>) -> Self {
        match record {
            Some(r) => Self {
                steps_percent: progress_percent(r.steps as f64, STEPS_GOAL),
                sleep_percent: progress_percent(r.sleep_hours, SLEEP_GOAL_HOURS),
                water_percent: progress_percent(r.water_intake, WATER_GOAL_LITRES),
            },
            None => Self {
                steps_percent: 0.0,
                sleep_percent: 0.0,
                water_percent: 0.0,
            },
        }
    }
}

/// Share of `goal` reached, capped to 0..=100
pub fn progress_percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::synthetic::generate_synthetic_metrics;
    use crate::monitoring::trend::TrendDirection;
    use crate::monitoring::types::AlertType;
    use chrono::Utc;

    fn alert(id: &str, alert_type: AlertType, is_read: bool) -> AlertRecord {
        AlertRecord {
            id: id.to_string(),
            alert_type,
            message: format!("alert {}", id),
            metric_value: None,
            is_read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_latest_is_first_record() {
        let metrics = generate_synthetic_metrics();
        let snapshot = HealthSnapshot {
            metrics: metrics.clone(),
            alerts: vec![],
            origin: DataOrigin::Synthetic,
        };

        let view = DashboardView::derive(&snapshot);
        assert_eq!(view.latest.as_ref(), metrics.first());
        assert_eq!(view.record_count, 30);
        assert!(view.sparklines.heart_rate.is_some());
        assert_eq!(view.sparklines.weight.as_ref().unwrap().color, WEIGHT_COLOR);
    }

    #[test]
    fn test_only_unread_alerts_surface() {
        let snapshot = HealthSnapshot {
            metrics: generate_synthetic_metrics(),
            alerts: vec![
                alert("1", AlertType::Critical, true),
                alert("2", AlertType::Warning, false),
                alert("3", AlertType::Critical, false),
                alert("4", AlertType::Informational, true),
            ],
            origin: DataOrigin::Store,
        };

        let view = DashboardView::derive(&snapshot);
        let ids: Vec<&str> = view.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(view.alerts.iter().all(|a| !a.is_read));
    }

    #[test]
    fn test_trends_follow_series() {
        let mut metrics = generate_synthetic_metrics();
        for (i, m) in metrics.iter_mut().enumerate() {
            m.steps = if i < 7 { 10_000 } else { 5_000 };
        }
        let snapshot = HealthSnapshot {
            metrics,
            alerts: vec![],
            origin: DataOrigin::Synthetic,
        };

        let view = DashboardView::derive(&snapshot);
        assert!((view.trends.steps.percent - 100.0).abs() < 1e-9);
        assert_eq!(view.trends.steps.direction, TrendDirection::Up);
        assert_eq!(view.progress.steps_percent, 100.0);
    }

    #[test]
    fn test_empty_snapshot_has_no_latest() {
        let snapshot = HealthSnapshot {
            metrics: vec![],
            alerts: vec![],
            origin: DataOrigin::Store,
        };

        let view = DashboardView::derive(&snapshot);
        assert!(view.latest.is_none());
        assert!(view.sparklines.heart_rate.is_none());
        assert_eq!(view.trends.heart_rate.percent, 0.0);
        assert_eq!(view.progress.water_percent, 0.0);
    }

    #[test]
    fn test_progress_is_capped() {
        assert_eq!(progress_percent(12_000.0, STEPS_GOAL), 100.0);
        assert_eq!(progress_percent(4.0, SLEEP_GOAL_HOURS), 50.0);
        assert_eq!(progress_percent(-1.0, WATER_GOAL_LITRES), 0.0);
        assert_eq!(progress_percent(f64::NAN, WATER_GOAL_LITRES), 0.0);
    }
}
