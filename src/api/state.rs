//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::store::SnapshotLoader;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Acquires one snapshot per page or dashboard request
    pub loader: SnapshotLoader,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(loader: SnapshotLoader, config: ApiConfig) -> Self {
        Self {
            loader,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty allows any
    pub cors_origins: Vec<String>,
    /// Static asset directory served for unmatched paths
    pub static_dir: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            cors_origins: server.cors_origins.clone(),
            static_dir: server
                .static_dir
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_server_config() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: vec!["https://example.org".to_string()],
            static_dir: Some("  ".to_string()),
        };

        let config = ApiConfig::from(&server);
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.cors_origins.len(), 1);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_default_matches_server_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(config.cors_origins.is_empty());
        assert!(config.static_dir.is_none());
    }
}
