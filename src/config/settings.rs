//! Configuration settings structures.
//!
//! All sections can be loaded from TOML files and overridden with
//! `CLOUDGATE_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

fn default_app_name() -> String {
    "cloudgate".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Application basic information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: text or json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Root application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validates cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host", "must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port", "must be non-zero"));
        }
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logger.level.as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                "must be one of: error, warn, info, debug, trace",
            ));
        }
        if !["text", "json"].contains(&self.logger.format.as_str()) {
            return Err(ConfigError::validation(
                "logger.format",
                "must be text or json",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level_fails_validation() {
        let mut settings = Settings::default();
        settings.logger.level = "verbose".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [logger]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.logger.level, "debug");
        // Unspecified sections fall back to defaults
        assert_eq!(settings.application.name, "cloudgate");
    }
}
