//! Shared utilities.

pub mod validate;
