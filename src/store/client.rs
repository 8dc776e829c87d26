//! Hosted Store REST Client
//!
//! Read-only HTTP client for the PostgREST interface of the hosted
//! database holding the `health_metrics` and `health_alerts` tables.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{HealthDataSource, StoreError};
use crate::monitoring::{AlertRecord, MetricRecord};

/// Hosted store REST client
pub struct StoreClient {
    client: Client,
    config: StoreClientConfig,
}

/// Configuration for the store client
#[derive(Debug, Clone)]
pub struct StoreClientConfig {
    /// Project URL (e.g., "https://xyz.supabase.co")
    pub base_url: String,
    /// Public (anon) API key
    pub api_key: String,
    /// Table holding daily metric records
    pub metrics_table: String,
    /// Table holding alerts
    pub alerts_table: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for StoreClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            metrics_table: "health_metrics".to_string(),
            alerts_table: "health_alerts".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

impl StoreClient {
    /// Create a new store client with the given configuration
    pub fn new(config: StoreClientConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(StoreError::Request)?;

        Ok(Self { client, config })
    }

    /// REST endpoint for a table
    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Select all columns of `table`, newest first by `order_column`, at most `limit` rows.
    ///
    /// Single attempt: failures are returned to the caller as-is.
    async fn select_recent<T: DeserializeOwned>(
        &self,
        table: &str,
        order_column: &str,
        limit: usize,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table);
        let order = format!("{}.desc", order_column);
        let limit = limit.to_string();

        tracing::debug!(table, limit = %limit, "Reading from store");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("select", "*"),
                ("order", order.as_str()),
                ("limit", limit.as_str()),
            ])
            .header("apikey", &self.config.api_key)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.bytes().await.map_err(StoreError::from_transport)?;
        let rows: Vec<serde_json::Value> =
            serde_json::from_slice(&body).map_err(|e| StoreError::Decode {
                table: table.to_string(),
                error: e.to_string(),
            })?;

        Ok(decode_rows(table, rows))
    }
}

/// Decode each row on its own; a row that does not fit is dropped, not the batch
fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<serde_json::Value>) -> Vec<T> {
    let total = rows.len();

    let decoded: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(table, index, error = %e, "Skipping undecodable row");
                None
            }
        })
        .collect();

    if decoded.len() < total {
        tracing::warn!(
            table,
            kept = decoded.len(),
            total,
            "Some store rows were skipped"
        );
    }

    decoded
}

#[async_trait]
impl HealthDataSource for StoreClient {
    fn name(&self) -> &str {
        "store"
    }

    async fn recent_metrics(&self, limit: usize) -> Result<Vec<MetricRecord>, StoreError> {
        self.select_recent(&self.config.metrics_table, "metric_date", limit)
            .await
    }

    async fn recent_alerts(&self, limit: usize) -> Result<Vec<AlertRecord>, StoreError> {
        self.select_recent(&self.config.alerts_table, "created_at", limit)
            .await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        // PostgREST answers the root with its OpenAPI description
        let url = format!("{}/rest/v1/", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.api_key)
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::ApiError {
                status: response.status().as_u16(),
                message: "health check failed".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, RawQuery, State},
        http::HeaderMap,
        routing::get,
        Json, Router,
    };
    use std::sync::{Arc, Mutex};

    fn unreachable_client() -> StoreClient {
        StoreClient::new(StoreClientConfig {
            // nothing listens on port 1
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_ms: 1000,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = StoreClientConfig::default();
        assert_eq!(config.metrics_table, "health_metrics");
        assert_eq!(config.alerts_table, "health_alerts");
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let client = StoreClient::new(StoreClientConfig {
            base_url: "https://example.supabase.co/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.table_url("health_metrics"),
            "https://example.supabase.co/rest/v1/health_metrics"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_an_error() {
        let client = unreachable_client();

        assert!(client.recent_metrics(30).await.is_err());
        assert!(client.recent_alerts(10).await.is_err());
        assert!(client.health_check().await.is_err());
    }

    /// One request as seen by the local store: table, raw query, apikey, authorization
    type SeenRequest = (String, String, String, String);

    const METRIC_ROWS: &str = r#"[
        {"id":"m-1","metric_date":"2024-03-05","heart_rate":72,
         "blood_pressure_systolic":120,"blood_pressure_diastolic":80,"blood_glucose":95,
         "weight":"74.30","steps":9120,"sleep_hours":7.5,"water_intake":"2.4"},
        {"id":"m-2","metric_date":"2024-03-04","heart_rate":70,
         "blood_pressure_systolic":118,"blood_pressure_diastolic":79,"blood_glucose":92,
         "weight":74.5,"steps":8000,"sleep_hours":null,"water_intake":2.1},
        {"id":"m-3","metric_date":"2024-03-03","heart_rate":75,
         "blood_pressure_systolic":121,"blood_pressure_diastolic":82,"blood_glucose":99,
         "weight":74.6,"steps":10500,"sleep_hours":8.0,"water_intake":2.8}
    ]"#;

    const ALERT_ROWS: &str = r#"[
        {"id":"a-1","alert_type":"warning","message":"Blood pressure slightly elevated",
         "metric_value":"135/88","is_read":false,"created_at":"2024-03-05T09:00:00Z"}
    ]"#;

    async fn table_rows(
        State(seen): State<Arc<Mutex<Vec<SeenRequest>>>>,
        Path(table): Path<String>,
        RawQuery(query): RawQuery,
        headers: HeaderMap,
    ) -> Json<serde_json::Value> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        seen.lock().unwrap().push((
            table.clone(),
            query.unwrap_or_default(),
            header("apikey"),
            header("authorization"),
        ));

        let body = if table == "health_alerts" {
            ALERT_ROWS
        } else {
            METRIC_ROWS
        };
        Json(serde_json::from_str(body).unwrap())
    }

    /// Serve a minimal PostgREST stand-in on an ephemeral port
    async fn local_store() -> (StoreClient, Arc<Mutex<Vec<SeenRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/rest/v1/", get(|| async { "{}" }))
            .route("/rest/v1/:table", get(table_rows))
            .with_state(Arc::clone(&seen));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = StoreClient::new(StoreClientConfig {
            base_url: format!("http://{}/", addr),
            api_key: "anon-key".to_string(),
            ..Default::default()
        })
        .unwrap();

        (client, seen)
    }

    #[tokio::test]
    async fn test_reads_both_tables_with_postgrest_query() {
        let (client, seen) = local_store().await;

        let metrics = client.recent_metrics(30).await.unwrap();
        let alerts = client.recent_alerts(10).await.unwrap();
        client.health_check().await.unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);

        let (table, query, apikey, auth) = &seen[0];
        assert_eq!(table, "health_metrics");
        assert_eq!(query, "select=*&order=metric_date.desc&limit=30");
        assert_eq!(apikey, "anon-key");
        assert_eq!(auth, "Bearer anon-key");

        let (table, query, _, _) = &seen[1];
        assert_eq!(table, "health_alerts");
        assert_eq!(query, "select=*&order=created_at.desc&limit=10");

        assert_eq!(metrics[0].weight, 74.3);
        assert_eq!(metrics[0].water_intake, 2.4);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].metric_value(), Some("135/88"));
    }

    #[tokio::test]
    async fn test_row_with_null_column_is_skipped_not_the_batch() {
        let (client, _seen) = local_store().await;

        let metrics = client.recent_metrics(30).await.unwrap();
        let ids: Vec<&str> = metrics.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m-1", "m-3"]);
    }

    #[test]
    fn test_decode_rows_keeps_order() {
        let rows: Vec<serde_json::Value> = serde_json::from_str(METRIC_ROWS).unwrap();
        let decoded: Vec<MetricRecord> = decode_rows("health_metrics", rows);

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].id, "m-3");
        assert_eq!(decoded[1].sleep_hours, 8.0);
    }
}
