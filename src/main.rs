//! HealthHub Server
//!
//! Run with: cargo run --bin healthhub
//!
//! # Configuration
//!
//! Read from the first config file found (see `healthhub-cli config`),
//! then overridden by environment variables:
//! - `HEALTHHUB_HOST`, `HEALTHHUB_PORT`: bind address (default: 0.0.0.0:8080)
//! - `HEALTHHUB_STORE_URL` / `SUPABASE_URL`: hosted store (optional)
//! - `HEALTHHUB_STORE_KEY` / `SUPABASE_ANON_KEY`: store API key
//! - `HEALTHHUB_STATIC_DIR`: static asset directory (optional)
//! - `HEALTHHUB_LOG_LEVEL`, `HEALTHHUB_LOG_FORMAT`: logging
//! - `RUST_LOG`: full filter, overrides the log level

use std::sync::Arc;

use healthhub::api::{serve, ApiConfig, AppState};
use healthhub::config::Config;
use healthhub::logging::init_logging;
use healthhub::store::{SnapshotLoader, StoreClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    init_logging(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting HealthHub v{}", env!("CARGO_PKG_VERSION"));

    let loader = build_loader(&config)?;
    let api_config = ApiConfig::from(&config.server);

    if let Some(dir) = &api_config.static_dir {
        tracing::info!("Serving static assets from {}", dir);
    }

    let state = AppState::new(loader, api_config.clone());
    serve(state, &api_config).await?;

    Ok(())
}

fn build_loader(config: &Config) -> anyhow::Result<SnapshotLoader> {
    let loader = match config.store.client_config() {
        Some(client_config) => {
            tracing::info!("Hosted store enabled: {}", client_config.base_url);
            let client = StoreClient::new(client_config)?;
            SnapshotLoader::new(Arc::new(client))
        }
        None => {
            tracing::info!("No hosted store configured, dashboard will show synthetic data");
            SnapshotLoader::offline()
        }
    };

    Ok(loader.limits(config.store.metrics_limit, config.store.alerts_limit))
}
