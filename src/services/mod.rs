//! Service collaborators behind the gateway facade.
//!
//! Each resource delegates to exactly one collaborator trait. The in-memory
//! implementations here make the server runnable on its own; handler tests
//! swap them for recording stubs.

mod alert_service;
mod feature_availability_service;
mod health_status_service;
mod log_analysis_service;
mod service_instance_service;
mod version_info;

pub use alert_service::{AlertService, InMemoryAlertService};
pub use feature_availability_service::{
    FeatureAvailabilityService, InMemoryFeatureAvailabilityService,
};
pub use health_status_service::{HealthStatusService, InMemoryHealthStatusService};
pub use log_analysis_service::{InMemoryLogAnalysisService, LogAnalysisService};
pub use service_instance_service::{InMemoryServiceInstanceService, ServiceInstanceService};
pub use version_info::{BuildVersionInfoManager, VersionInfoManager};

use std::sync::Arc;

/// Aggregates all collaborators for convenient access from handlers.
///
/// This struct is carried inside the Axum application state. Cloning is
/// cheap since every collaborator is held behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub alerts: Arc<dyn AlertService>,
    pub health: Arc<dyn HealthStatusService>,
    pub log_analysis: Arc<dyn LogAnalysisService>,
    pub features: Arc<dyn FeatureAvailabilityService>,
    pub instances: Arc<dyn ServiceInstanceService>,
    pub version: Arc<dyn VersionInfoManager>,
}

impl Services {
    /// Wires the seeded in-memory collaborators, the default standalone setup.
    pub fn in_memory() -> Self {
        Self {
            alerts: Arc::new(InMemoryAlertService::seeded()),
            health: Arc::new(InMemoryHealthStatusService::seeded()),
            log_analysis: Arc::new(InMemoryLogAnalysisService::seeded()),
            features: Arc::new(InMemoryFeatureAvailabilityService::seeded()),
            instances: Arc::new(InMemoryServiceInstanceService::seeded()),
            version: Arc::new(BuildVersionInfoManager::new()),
        }
    }
}
