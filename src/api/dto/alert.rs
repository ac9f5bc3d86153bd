//! Alert DTOs, threaded through from the alert collaborator unchanged.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A triggered platform alert.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub uuid: Uuid,
    pub account_id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub status: AlertStatus,
    pub title: String,
    pub category: String,
    pub severity: AlertSeverity,
    /// Epoch milliseconds at which the alert fired
    pub triggered_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Open,
    Pending,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}
