//! Configuration management.
//!
//! Layered loading with support for TOML files and environment variable
//! overrides, in priority order (lowest to highest):
//! 1. `default.toml`
//! 2. `{environment}.toml`
//! 3. `local.toml` (not committed to version control)
//! 4. `CLOUDGATE_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::Settings;
