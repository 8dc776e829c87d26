//! Dashboard Routes
//!
//! JSON views of the same data the page renders.
//!
//! - GET /api/v1/dashboard - Derived dashboard view
//! - GET /api/v1/metrics - Raw records, or one series with `?series=`

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{DashboardResponse, MetricListResponse, MetricsParams, SeriesResponse};
use crate::api::state::AppState;
use crate::monitoring::DashboardView;

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let snapshot = state.loader.load().await;

    Json(DashboardResponse {
        generated_at: Utc::now(),
        dashboard: DashboardView::derive(&snapshot),
    })
}

/// GET /api/v1/metrics
pub async fn list_metrics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MetricsParams>,
) -> Response {
    let snapshot = state.loader.load().await;

    match params.series {
        Some(metric) => Json(SeriesResponse {
            origin: snapshot.origin,
            metric,
            unit: metric.unit().to_string(),
            values: metric.series(&snapshot.metrics),
        })
        .into_response(),
        None => Json(MetricListResponse {
            origin: snapshot.origin,
            total: snapshot.metrics.len(),
            records: snapshot.metrics,
        })
        .into_response(),
    }
}
