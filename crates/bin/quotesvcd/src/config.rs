//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `quotesvc.toml` in the working directory. Server and logging
//! fields have defaults so the file is optional; database credentials must be
//! provided through the file or the environment. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `PostgreSQL` connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database user (required).
    pub user: String,
    /// Database password (required).
    pub password: String,
    /// Database name (required).
    pub name: String,
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// SSL mode (`disable`, `prefer`, `require`, …).
    pub ssl_mode: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `quotesvc.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// merged configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("quotesvc.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("QUOTESVC_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("QUOTESVC_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_USER") {
            self.database.user = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_PASS") {
            self.database.password = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_NAME") {
            self.database.name = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_HOST") {
            self.database.host = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_PORT") {
            if let Ok(port) = val.parse() {
                self.database.port = port;
            }
        }
        if let Ok(val) = std::env::var("QUOTESVC_DB_SSL_MODE") {
            self.database.ssl_mode = val;
        }
        if let Ok(val) = std::env::var("QUOTESVC_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.user.is_empty() {
            return Err(ConfigError::Validation(
                "database user must be set".to_string(),
            ));
        }
        if self.database.password.is_empty() {
            return Err(ConfigError::Validation(
                "database password must be set".to_string(),
            ));
        }
        if self.database.name.is_empty() {
            return Err(ConfigError::Validation(
                "database name must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            name: String::new(),
            host: "localhost".to_string(),
            port: 5432,
            ssl_mode: "disable".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "quotesvcd=info,quotesvc=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
