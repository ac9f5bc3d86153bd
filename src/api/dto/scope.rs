//! Query-parameter binding structs shared by the resource handlers.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// The `accountId` query parameter.
///
/// Bound on every account-scoped resource to keep the wire contract;
/// account enforcement itself happens in the platform's outer auth layer,
/// so most collaborator calls do not take it.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountScope {
    #[validate(length(min = 1, message = "accountId must not be empty"))]
    #[param(example = "kmpySmUISimoRrJL6NL73w")]
    pub account_id: String,
}

/// Query parameters for the cost-health resource.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CostHealthParams {
    #[validate(length(min = 1, message = "accountId must not be empty"))]
    pub account_id: String,

    /// Cloud provider connector to report health for
    #[validate(length(min = 1, message = "cloudProviderId must not be empty"))]
    pub cloud_provider_id: String,
}
