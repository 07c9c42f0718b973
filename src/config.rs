//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where new entries come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Entries are loaded from and created on the remote endpoint
    #[default]
    Remote,
    /// Entries are synthesized locally and live only for the session
    Local,
}

impl std::str::FromStr for SyncMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(SyncMode::Remote),
            "local" => Ok(SyncMode::Local),
            other => Err(ConfigError::Invalid(format!("unknown sync mode: {other}"))),
        }
    }
}

/// Remote waste endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default)]
    pub mode: SyncMode,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_endpoint() -> String {
    "/api/waste".to_string()
}

fn default_request_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            request_timeout_ms: default_request_timeout(),
            mode: SyncMode::default(),
        }
    }
}

impl RemoteConfig {
    /// Full URL of the waste collection
    pub fn collection_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = self.endpoint.trim_start_matches('/');
        format!("{}/{}", base, endpoint)
    }
}

/// Notification stacking and timing
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u64,

    #[serde(default = "default_base_offset")]
    pub base_offset: u32,

    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Extent assumed for a notice until a front end reports a measured one
    #[serde(default = "default_notice_height")]
    pub notice_height: u32,
}

fn default_dismiss_after() -> u64 {
    3000
}

fn default_base_offset() -> u32 {
    20
}

fn default_margin() -> u32 {
    10
}

fn default_notice_height() -> u32 {
    60
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
            base_offset: default_base_offset(),
            margin: default_margin(),
            notice_height: default_notice_height(),
        }
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
    "warn".to_string()
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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("waste-tracker").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("WASTE_API_URL") {
            self.remote.base_url = url;
        }
        if let Some(mode) = lookup("WASTE_MODE") {
            match mode.parse() {
                Ok(mode) => self.remote.mode = mode,
                Err(e) => tracing::warn!("Ignoring WASTE_MODE: {}", e),
            }
        }

        if let Some(level) = lookup("WASTE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WASTE_LOG_FORMAT") {
            self.logging.format = format;
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Waste Tracker Configuration
#
# Environment variables override these settings:
# - WASTE_API_URL
# - WASTE_MODE
# - WASTE_LOG_LEVEL
# - WASTE_LOG_FORMAT

[remote]
# Server hosting the waste collection
base_url = "http://localhost:5000"

# Collection path on that server
endpoint = "/api/waste"

# Request timeout (ms)
request_timeout_ms = 10000

# remote: load and create entries on the server
# local: keep entries in memory for the session only (items are uppercased)
mode = "remote"

[notifications]
# How long a notice stays visible (ms)
dismiss_after_ms = 3000

# Distance of the first notice from the bottom edge
base_offset = 20

# Gap between stacked notices
margin = 10

# Assumed notice height when none is measured
notice_height = 60

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
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
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote.collection_url(), "http://localhost:5000/api/waste");
        assert_eq!(config.remote.mode, SyncMode::Remote);
        assert_eq!(config.notifications.dismiss_after_ms, 3000);
        assert_eq!(config.notifications.base_offset, 20);
        assert_eq!(config.notifications.margin, 10);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.remote.base_url, "http://localhost:5000");
        assert_eq!(config.remote.endpoint, "/api/waste");
        assert_eq!(config.notifications.notice_height, 60);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[remote]\nbase_url = \"http://waste.local:8000/\"\nmode = \"local\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.remote.mode, SyncMode::Local);
        assert_eq!(config.remote.collection_url(), "http://waste.local:8000/api/waste");
        assert_eq!(config.notifications.dismiss_after_ms, 3000);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[remote\nbase_url = 3").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/waste/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WASTE_API_URL", "http://example.test"),
            ("WASTE_MODE", "LOCAL"),
            ("WASTE_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.remote.base_url, "http://example.test");
        assert_eq!(config.remote.mode, SyncMode::Local);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_mode_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "WASTE_MODE").then(|| "cloud".to_string()));
        assert_eq!(config.remote.mode, SyncMode::Remote);
    }
}
