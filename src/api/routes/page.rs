//! Page Route
//!
//! - GET / - The full site with the monitoring dashboard

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::monitoring::DashboardView;
use crate::site::render_page;

/// GET /
///
/// Acquires one snapshot and renders the page around it.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.loader.load().await;
    let view = DashboardView::derive(&snapshot);

    tracing::debug!(
        origin = %view.origin,
        records = view.record_count,
        unread_alerts = view.alerts.len(),
        "Rendering page"
    );

    Html(render_page(&view))
}
