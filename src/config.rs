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
    pub database: DatabaseConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hotel store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "hotel.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_api_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    8501
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_api_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Static page server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_site_port")]
    pub port: u16,

    #[serde(default = "default_open_delay")]
    pub open_delay_ms: u64,

    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_site_port() -> u16 {
    5000
}

fn default_open_delay() -> u64 {
    1000 // 1 second
}

fn default_open_browser() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_site_port(),
            open_delay_ms: default_open_delay(),
            open_browser: default_open_browser(),
        }
    }
}

impl SiteConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL of the page, for opening in a browser
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr())
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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
    ///
    /// Nothing is logged here; the caller installs the subscriber from the
    /// returned config first and then calls [`LoadedConfig::log`].
    pub fn load_default() -> LoadedConfig {
        let candidates: Vec<PathBuf> = [
            Some(PathBuf::from("./hotel-dashboard.toml")),
            dirs::config_dir().map(|p| p.join("hotel-dashboard").join("config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first candidate file that exists and parses
    pub fn load_first(candidates: &[PathBuf]) -> LoadedConfig {
        let mut rejected = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        rejected,
                    }
                }
                Err(e) => rejected.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            rejected,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("HOTEL_DB_PATH") {
            self.database.path = path;
        }

        if let Ok(host) = std::env::var("HOTEL_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("HOTEL_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(port) = std::env::var("HOTEL_SITE_PORT") {
            if let Ok(p) = port.parse() {
                self.site.port = p;
            }
        }

        if let Ok(open) = std::env::var("HOTEL_SITE_OPEN_BROWSER") {
            if let Ok(b) = open.parse() {
                self.site.open_browser = b;
            }
        }

        if let Ok(level) = std::env::var("HOTEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HOTEL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of a default-location lookup
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub rejected: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report the lookup once a subscriber is installed
    pub fn log(&self) {
        for error in &self.rejected {
            tracing::warn!("Skipped config file: {}", error);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Hotel Dashboard Configuration
#
# Environment variables override these settings:
# - HOTEL_DB_PATH
# - HOTEL_API_HOST
# - HOTEL_API_PORT
# - HOTEL_SITE_PORT
# - HOTEL_SITE_OPEN_BROWSER
# - HOTEL_LOG_LEVEL
# - HOTEL_LOG_FORMAT

[database]
# SQLite file holding hotels, clients, rooms, reservations and reviews
path = "hotel.db"

[api]
# Dashboard server host
host = "127.0.0.1"

# Dashboard server port
port = 8501

[site]
# Static page server host and port
host = "127.0.0.1"
port = 5000

# Open the page in the default browser once the server is up
open_browser = true

# Delay before the browser is opened (ms)
open_delay_ms = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
