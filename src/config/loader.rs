//! Layered configuration loading.
//!
//! Sources in order of priority (lowest to highest):
//! 1. `default.toml` in the configuration directory
//! 2. `{environment}.toml`
//! 3. `local.toml` (developer overrides, not committed)
//! 4. `CLOUDGATE_*` environment variables (`__` separates nested keys)

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "CLOUDGATE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "CLOUDGATE";
const ENV_SEPARATOR: &str = "__";

/// Loads settings from layered TOML files plus environment overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// Single-file mode: skips layered loading entirely
    config_file: Option<PathBuf>,
    environment: Environment,
}

impl ConfigLoader {
    /// Loader rooted at `CLOUDGATE_CONFIG_DIR` (default `config/`), with the
    /// environment read from `CLOUDGATE_APP_ENV`.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        Self {
            config_dir,
            config_file: None,
            environment: Environment::from_env(),
        }
    }

    /// Loader reading exactly one configuration file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: Environment::from_env(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Loads and validates settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref config_file) = self.config_file {
            if !config_file.exists() {
                return Err(ConfigError::file_not_found(
                    config_file.display().to_string(),
                ));
            }
            builder = builder.add_source(file_source(config_file, true));
        } else if self.config_dir.exists() {
            builder = builder
                .add_source(file_source(&self.config_dir.join("default.toml"), false))
                .add_source(file_source(
                    &self
                        .config_dir
                        .join(format!("{}.toml", self.environment.as_str())),
                    false,
                ))
                .add_source(file_source(&self.config_dir.join("local.toml"), false));
        }

        // Environment variables always win
        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR),
        );

        builder.build().map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn file_source(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}
