//! Health Monitoring
//!
//! Records and the derivations behind the monitoring dashboard.
//!
//! ## Components
//!
//! - **types**: metric and alert records, data origin, snapshot
//! - **trend**: week-over-week percentage change
//! - **sparkline**: normalized coordinates for inline charts
//! - **synthetic**: fallback month of generated records
//! - **dashboard**: the derived view rendered by the site

pub mod dashboard;
pub mod sparkline;
pub mod synthetic;
pub mod trend;
pub mod types;

pub use dashboard::{DashboardSparklines, DashboardTrends, DashboardView, GoalProgress};
pub use sparkline::{sparkline_points, Point, Sparkline, SPARKLINE_WINDOW};
pub use synthetic::{generate_synthetic_metrics, generate_synthetic_metrics_from, SYNTHETIC_DAYS};
pub use trend::{calculate_trend, Trend, TrendDirection, TREND_WINDOW};
pub use types::{AlertRecord, AlertType, DataOrigin, HealthSnapshot, MetricKind, MetricRecord};
