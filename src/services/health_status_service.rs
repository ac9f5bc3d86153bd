//! Cost-health collaborator, keyed by cloud provider connector id.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::api::dto::{CeHealthStatus, ClusterHealthStatus};
use crate::error::{AppError, AppResult};

/// Collaborator computing cost-data health for a cloud provider.
#[async_trait]
pub trait HealthStatusService: Send + Sync {
    /// Returns the health status for the given cloud provider id.
    async fn get_health_status(&self, cloud_provider_id: &str) -> AppResult<CeHealthStatus>;
}

/// In-memory health store.
#[derive(Clone, Default)]
pub struct InMemoryHealthStatusService {
    statuses: Arc<DashMap<String, CeHealthStatus>>,
}

impl InMemoryHealthStatusService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let service = Self::new();
        let now = jiff::Timestamp::now().as_millisecond();
        service.insert(
            "kubernetes-prod",
            CeHealthStatus {
                is_healthy: true,
                cluster_health_statuses: vec![ClusterHealthStatus {
                    cluster_id: "cl-prod-east".to_string(),
                    cluster_name: "prod-east".to_string(),
                    errors: Vec::new(),
                    last_event_timestamp: now,
                }],
            },
        );
        service.insert(
            "aws-billing",
            CeHealthStatus {
                is_healthy: false,
                cluster_health_statuses: vec![ClusterHealthStatus {
                    cluster_id: "cl-billing".to_string(),
                    cluster_name: "billing-cur".to_string(),
                    errors: vec!["No billing report received in the last 24 hours".to_string()],
                    last_event_timestamp: now - 86_400_000, // 24h stale
                }],
            },
        );
        service
    }

    pub fn insert(&self, cloud_provider_id: &str, status: CeHealthStatus) {
        self.statuses.insert(cloud_provider_id.to_string(), status);
    }
}

#[async_trait]
impl HealthStatusService for InMemoryHealthStatusService {
    async fn get_health_status(&self, cloud_provider_id: &str) -> AppResult<CeHealthStatus> {
        self.statuses
            .get(cloud_provider_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::not_found("CloudProvider", "cloudProviderId", cloud_provider_id)
            })
    }
}
