//! Version info collaborator, backed by compile-time build metadata.

use async_trait::async_trait;

use crate::api::dto::VersionInfo;
use crate::error::AppResult;

/// Collaborator producing the gateway's version information.
#[async_trait]
pub trait VersionInfoManager: Send + Sync {
    async fn get_version_info(&self) -> AppResult<VersionInfo>;
}

/// Version info taken from shadow-rs build constants.
#[derive(Clone, Default)]
pub struct BuildVersionInfoManager;

impl BuildVersionInfoManager {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VersionInfoManager for BuildVersionInfoManager {
    async fn get_version_info(&self) -> AppResult<VersionInfo> {
        Ok(VersionInfo {
            version: crate::build::PKG_VERSION.to_string(),
            build_no: crate::build::SHORT_COMMIT.to_string(),
            git_commit: crate::build::COMMIT_HASH.to_string(),
            git_branch: crate::build::BRANCH.to_string(),
            timestamp: crate::build::BUILD_TIME.to_string(),
        })
    }
}
