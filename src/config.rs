//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::{StoreClientConfig, DEFAULT_ALERTS_LIMIT, DEFAULT_METRICS_LIMIT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory of static assets (images) served under `/`
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

/// Hosted store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Project URL; when unset the dashboard always shows synthetic data
    #[serde(default)]
    pub url: Option<String>,

    /// Public (anon) API key
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_metrics_table")]
    pub metrics_table: String,

    #[serde(default = "default_alerts_table")]
    pub alerts_table: String,

    #[serde(default = "default_metrics_limit")]
    pub metrics_limit: usize,

    #[serde(default = "default_alerts_limit")]
    pub alerts_limit: usize,

    #[serde(default = "default_store_timeout")]
    pub request_timeout_ms: u64,
}

fn default_metrics_table() -> String {
    "health_metrics".to_string()
}

fn default_alerts_table() -> String {
    "health_alerts".to_string()
}

fn default_metrics_limit() -> usize {
    DEFAULT_METRICS_LIMIT
}

fn default_alerts_limit() -> usize {
    DEFAULT_ALERTS_LIMIT
}

fn default_store_timeout() -> u64 {
    5000 // 5 seconds
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: String::new(),
            metrics_table: default_metrics_table(),
            alerts_table: default_alerts_table(),
            metrics_limit: default_metrics_limit(),
            alerts_limit: default_alerts_limit(),
            request_timeout_ms: default_store_timeout(),
        }
    }
}

impl StoreConfig {
    /// Client configuration, or `None` when no store URL is set
    pub fn client_config(&self) -> Option<StoreClientConfig> {
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;

        Some(StoreClientConfig {
            base_url: url.to_string(),
            api_key: self.api_key.clone(),
            metrics_table: self.metrics_table.clone(),
            alerts_table: self.alerts_table.clone(),
            request_timeout_ms: self.request_timeout_ms,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; the caller installs logging from the result
    /// and then calls [`LoadOutcome::log`].
    pub fn load_default() -> LoadOutcome {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("healthhub").join("config.toml")),
            Some(PathBuf::from("/etc/healthhub/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file that parses, collecting failures on the way
    fn load_first(config_paths: &[PathBuf]) -> LoadOutcome {
        let mut failures = Vec::new();

        for path in config_paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadOutcome {
                        config,
                        source: ConfigSource::File(path.clone()),
                        failures,
                    };
                }
                Err(e) => failures.push(e),
            }
        }

        LoadOutcome {
            config: Self::from_env(),
            source: ConfigSource::Defaults,
            failures,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("HEALTHHUB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HEALTHHUB_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = lookup("HEALTHHUB_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Store overrides; the hosted-backend names are honoured too
        if let Some(url) = lookup("HEALTHHUB_STORE_URL").or_else(|| lookup("SUPABASE_URL")) {
            self.store.url = Some(url);
        }
        if let Some(key) = lookup("HEALTHHUB_STORE_KEY").or_else(|| lookup("SUPABASE_ANON_KEY")) {
            self.store.api_key = key;
        }

        // Logging overrides
        if let Some(level) = lookup("HEALTHHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEALTHHUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Result of searching the default locations
#[derive(Debug)]
pub struct LoadOutcome {
    pub config: Config,
    pub source: ConfigSource,
    /// Files that exist but could not be read or parsed
    pub failures: Vec<ConfigError>,
}

impl LoadOutcome {
    /// Report skipped files and the chosen source
    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipping config file: {}", failure);
        }

        match &self.source {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HealthHub Configuration
#
# Environment variables override these settings:
# - HEALTHHUB_HOST
# - HEALTHHUB_PORT
# - HEALTHHUB_STATIC_DIR
# - HEALTHHUB_STORE_URL (or SUPABASE_URL)
# - HEALTHHUB_STORE_KEY (or SUPABASE_ANON_KEY)
# - HEALTHHUB_LOG_LEVEL
# - HEALTHHUB_LOG_FORMAT

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8080

# Allowed CORS origins for the JSON API (empty = any)
cors_origins = []

# Directory with static assets such as the creator photo
# static_dir = "./public"

[store]
# Hosted store project URL. Leave unset to always show synthetic data.
# url = "https://your-project.supabase.co"

# Public (anon) API key
api_key = ""

# Tables read by the dashboard
metrics_table = "health_metrics"
alerts_table = "health_alerts"

# How many records to request
metrics_limit = 30
alerts_limit = 10

# Request timeout in milliseconds
request_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.metrics_limit, 30);
        assert_eq!(config.store.alerts_limit, 10);
        assert!(config.store.url.is_none());
        assert!(config.store.client_config().is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000

[store]
url = "https://demo.supabase.co"
api_key = "anon"
metrics_limit = 14
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.metrics_limit, 14);
        assert_eq!(config.store.alerts_limit, 10);

        let client = config.store.client_config().unwrap();
        assert_eq!(client.base_url, "https://demo.supabase.co");
        assert_eq!(client.api_key, "anon");
        assert_eq!(client.metrics_table, "health_metrics");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::load(Path::new("/nonexistent/healthhub.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("HEALTHHUB_PORT", "7070"),
            ("SUPABASE_URL", "https://fallback.supabase.co"),
            ("HEALTHHUB_STORE_KEY", "primary-key"),
            ("SUPABASE_ANON_KEY", "ignored-key"),
            ("HEALTHHUB_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 7070);
        assert_eq!(
            config.store.url.as_deref(),
            Some("https://fallback.supabase.co")
        );
        assert_eq!(config.store.api_key, "primary-key");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_broken_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&valid, "[server]\nport = 9100\n").unwrap();

        let outcome = Config::load_first(&[
            dir.path().join("missing.toml"),
            broken.clone(),
            valid.clone(),
        ]);

        assert_eq!(outcome.source, ConfigSource::File(valid));
        assert_eq!(outcome.config.server.port, 9100);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            &outcome.failures[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_no_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Config::load_first(&[dir.path().join("missing.toml")]);

        assert_eq!(outcome.source, ConfigSource::Defaults);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_blank_store_url_is_unconfigured() {
        let config = StoreConfig {
            url: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.client_config().is_none());
    }
}
