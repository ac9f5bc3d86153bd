//! Service instance DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A deployed instance of a service on a host.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    pub uuid: Uuid,
    pub app_id: String,
    pub env_id: String,
    pub service_name: String,
    pub host_name: String,
    pub infra_mapping_id: String,
    /// Epoch milliseconds of the most recent deployment to this instance
    pub last_deployed_at: i64,
}
