//! Cloudgate library.
//!
//! A read-only operations API gateway: thin HTTP resource handlers that
//! delegate to service collaborators and wrap results in the platform
//! response envelope.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
