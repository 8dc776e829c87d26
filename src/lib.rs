//! # HealthHub
//!
//! Marketing site for the AI Healthcare Hub with a live Health Monitoring
//! Dashboard, rendered on the server.
//!
//! ## Features
//!
//! - **Single page**: navigation, portals, features, about, dashboard, creator, footer
//! - **Dashboard**: latest vitals, week-over-week trends, inline SVG sparklines
//! - **Resilient data**: hosted store when reachable, a synthetic month otherwise
//!
//! ## Modules
//!
//! - [`monitoring`]: records and dashboard derivations
//! - [`store`]: hosted-store client and snapshot loader
//! - [`site`]: HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: file and environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthhub::monitoring::DashboardView;
//! use healthhub::site::render_page;
//! use healthhub::store::SnapshotLoader;
//!
//! #[tokio::main]
//! async fn main() {
//!     let snapshot = SnapshotLoader::offline().load().await;
//!     let html = render_page(&DashboardView::derive(&snapshot));
//!
//!     println!("{}", html);
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod monitoring;
pub mod site;
pub mod store;

// Re-export top-level types for convenience
pub use monitoring::{
    calculate_trend, generate_synthetic_metrics, sparkline_points, AlertRecord, AlertType,
    DashboardView, DataOrigin, HealthSnapshot, MetricKind, MetricRecord, Trend,
};

pub use store::{HealthDataSource, SnapshotLoader, StoreClient, StoreClientConfig, StoreError};

pub use site::render_page;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::Config;
