//! OpenAPI documentation for the gateway surface.

use utoipa::OpenApi;

pub const ALERT_TAG: &str = "Alerts";
pub const COST_TAG: &str = "Cost";
pub const LOG_ANALYSIS_TAG: &str = "Log Analysis";
pub const FEATURE_TAG: &str = "Features";
pub const INSTANCE_TAG: &str = "Service Instances";
pub const VERSION_TAG: &str = "Version";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cloudgate",
        description = "Read-only operations API gateway for the cloud management platform",
    ),
    paths(
        crate::api::handlers::alerts::list_alerts,
        crate::api::handlers::cost_health::get_cost_health,
        crate::api::handlers::log_analysis::get_exp_analysis_info,
        crate::api::handlers::features::list_feature_availability,
        crate::api::handlers::service_instances::list_service_instances,
        crate::api::handlers::version::get_version_info,
    ),
    components(
        schemas(
            crate::api::dto::ScimError,
            crate::api::dto::ResponseMessage,
        )
    ),
    tags(
        (name = ALERT_TAG, description = "Triggered platform alerts"),
        (name = COST_TAG, description = "Cloud cost health checks"),
        (name = LOG_ANALYSIS_TAG, description = "Experimental log analysis records"),
        (name = FEATURE_TAG, description = "Per-account feature availability"),
        (name = INSTANCE_TAG, description = "Deployed service instances"),
        (name = VERSION_TAG, description = "Gateway build and version info"),
    )
)]
pub struct ApiDoc;
