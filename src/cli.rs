//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shadow_rs::shadow;

use crate::config::{ConfigLoader, Environment, Settings};

shadow!(build);

/// Read-only operations API gateway for the cloud management platform
#[derive(Parser, Debug)]
#[command(name = "cloudgate")]
#[command(about = "Read-only operations API gateway")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (single-file mode, skips layered loading)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    #[arg(short, long, value_enum)]
    pub env: Option<EnvironmentArg>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EnvironmentArg {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Development => Environment::Development,
            EnvironmentArg::Test => Environment::Test,
            EnvironmentArg::Staging => Environment::Staging,
            EnvironmentArg::Production => Environment::Production,
        }
    }
}

impl Cli {
    /// Loads settings from configuration sources and applies CLI overrides.
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let mut loader = match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new(),
        };
        if let Some(env) = self.env {
            loader = loader.with_environment(env.into());
        }
        let mut settings = loader.load()?;

        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }
        if let Some(Commands::Serve { host, port, .. }) = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags_override_settings() {
        let cli = Cli::parse_from([
            "cloudgate", "serve", "--host", "0.0.0.0", "--port", "8080",
        ]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = Cli::parse_from(["cloudgate", "--verbose", "serve"]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["cloudgate", "--verbose", "--quiet", "serve"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_flag_parses() {
        let cli = Cli::parse_from(["cloudgate", "serve", "--dry-run"]);
        match cli.command {
            Some(Commands::Serve { dry_run, .. }) => assert!(dry_run),
            other => panic!("Expected serve command, got {:?}", other),
        }
    }
}
