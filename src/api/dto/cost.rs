//! Cloud cost health DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated cost-data health for one cloud provider connector.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeHealthStatus {
    pub is_healthy: bool,
    pub cluster_health_statuses: Vec<ClusterHealthStatus>,
}

/// Health of a single cluster feeding cost data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterHealthStatus {
    pub cluster_id: String,
    pub cluster_name: String,
    /// Collection errors observed for this cluster, empty when healthy
    pub errors: Vec<String>,
    /// Epoch milliseconds of the last cost event received
    pub last_event_timestamp: i64,
}
