//! Feature availability DTO.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether a named platform feature is available to an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAvailability {
    pub name: String,
    pub enabled: bool,
}
