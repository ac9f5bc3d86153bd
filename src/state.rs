//! Application state for the Axum web framework.
//!
//! Contains the service collaborators accessible from all request handlers.

use crate::services::Services;

/// Application state handed to every handler via the State extractor.
///
/// Cloning is cheap since Services holds its collaborators behind `Arc`.
/// Handlers keep no mutable fields of their own, so concurrent requests
/// share nothing beyond these read-only handles.
#[derive(Clone)]
pub struct AppState {
    /// Service collaborators, one per resource
    pub services: Services,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// State wired to the seeded in-memory collaborators.
    pub fn in_memory() -> Self {
        Self::new(Services::in_memory())
    }
}
