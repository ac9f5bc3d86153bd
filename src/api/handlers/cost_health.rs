//! Cost-health handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::COST_TAG;
use crate::api::dto::{CeHealthStatus, CostHealthParams, RestResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn cost_health_routes() -> Router<AppState> {
    Router::new().route("/health", get(get_cost_health))
}

/// GET /api/cost/health - Cost-data health for one cloud provider
#[utoipa::path(
    get,
    path = "/api/cost/health",
    tag = COST_TAG,
    params(CostHealthParams),
    responses(
        (status = 200, description = "Cost health status", body = RestResponse<CeHealthStatus>),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Unknown cloud provider")
    )
)]
pub(crate) async fn get_cost_health(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CostHealthParams>,
) -> AppResult<Json<RestResponse<CeHealthStatus>>> {
    let status = state
        .services
        .health
        .get_health_status(&params.cloud_provider_id)
        .await?;
    Ok(Json(RestResponse::new(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::testutil::{body_json, get_request, test_state};
    use crate::error::AppError;
    use crate::services::{HealthStatusService, Services};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Stub recording the cloud provider id it was asked about.
    #[derive(Default)]
    struct StubHealthService {
        seen: Mutex<Option<String>>,
        healthy: bool,
    }

    #[async_trait]
    impl HealthStatusService for StubHealthService {
        async fn get_health_status(&self, cloud_provider_id: &str) -> AppResult<CeHealthStatus> {
            *self.seen.lock().unwrap() = Some(cloud_provider_id.to_string());
            Ok(CeHealthStatus {
                is_healthy: self.healthy,
                cluster_health_statuses: Vec::new(),
            })
        }
    }

    fn router_with(stub: Arc<StubHealthService>) -> Router {
        let mut services = Services::in_memory();
        services.health = stub;
        Router::new()
            .nest("/api/cost", cost_health_routes())
            .with_state(test_state(services))
    }

    #[tokio::test]
    async fn test_cloud_provider_id_reaches_collaborator_verbatim() {
        let stub = Arc::new(StubHealthService {
            healthy: true,
            ..Default::default()
        });

        let response = router_with(stub.clone())
            .oneshot(get_request(
                "/api/cost/health?accountId=acct-1&cloudProviderId=kubernetes-prod",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            stub.seen.lock().unwrap().as_deref(),
            Some("kubernetes-prod")
        );

        let json = body_json(response).await;
        assert_eq!(json["resource"]["isHealthy"], true);
    }

    #[tokio::test]
    async fn test_missing_cloud_provider_id_is_bad_request() {
        let stub = Arc::new(StubHealthService::default());
        let response = router_with(stub)
            .oneshot(get_request("/api/cost/health?accountId=acct-1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Stub that always fails, to observe collaborator error propagation.
    struct FailingHealthService;

    #[async_trait]
    impl HealthStatusService for FailingHealthService {
        async fn get_health_status(&self, cloud_provider_id: &str) -> AppResult<CeHealthStatus> {
            Err(AppError::not_found(
                "CloudProvider",
                "cloudProviderId",
                cloud_provider_id,
            ))
        }
    }

    #[tokio::test]
    async fn test_collaborator_not_found_maps_to_404_envelope() {
        let mut services = Services::in_memory();
        services.health = Arc::new(FailingHealthService);
        let router = Router::new()
            .nest("/api/cost", cost_health_routes())
            .with_state(test_state(services));

        let response = router
            .oneshot(get_request(
                "/api/cost/health?accountId=acct-1&cloudProviderId=missing",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["resource"], serde_json::Value::Null);
        assert_eq!(json["responseMessages"][0]["code"], "RESOURCE_NOT_FOUND");
    }
}
