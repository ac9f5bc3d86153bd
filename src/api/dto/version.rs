//! Version info DTO, populated from build-time metadata.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Build and version information for the running gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub build_no: String,
    pub git_commit: String,
    pub git_branch: String,
    /// Build timestamp as recorded at compile time
    pub timestamp: String,
}
