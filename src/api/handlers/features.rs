//! Feature availability handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::FEATURE_TAG;
use crate::api::dto::{AccountScope, FeatureAvailability, RestResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn feature_routes() -> Router<AppState> {
    Router::new().route("/", get(list_feature_availability))
}

/// GET /api/features - Feature availability for the account
#[utoipa::path(
    get,
    path = "/api/features",
    tag = FEATURE_TAG,
    params(AccountScope),
    responses(
        (status = 200, description = "Feature availability entries", body = RestResponse<Vec<FeatureAvailability>>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub(crate) async fn list_feature_availability(
    State(state): State<AppState>,
    ValidatedQuery(scope): ValidatedQuery<AccountScope>,
) -> AppResult<Json<RestResponse<Vec<FeatureAvailability>>>> {
    let features = state
        .services
        .features
        .list_feature_availability(&scope.account_id)
        .await?;
    Ok(Json(RestResponse::new(features)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::testutil::{body_json, get_request, test_state};
    use crate::services::{FeatureAvailabilityService, Services};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Stub recording the account id it was called with.
    #[derive(Default)]
    struct StubFeatureService {
        seen: Mutex<Option<String>>,
    }

    #[async_trait]
    impl FeatureAvailabilityService for StubFeatureService {
        async fn list_feature_availability(
            &self,
            account_id: &str,
        ) -> AppResult<Vec<FeatureAvailability>> {
            *self.seen.lock().unwrap() = Some(account_id.to_string());
            Ok(vec![FeatureAvailability {
                name: "CE_BILLING_DATA".to_string(),
                enabled: true,
            }])
        }
    }

    fn router_with(stub: Arc<StubFeatureService>) -> Router {
        let mut services = Services::in_memory();
        services.features = stub;
        Router::new()
            .nest("/api/features", feature_routes())
            .with_state(test_state(services))
    }

    #[tokio::test]
    async fn test_account_id_forwarded_verbatim() {
        let stub = Arc::new(StubFeatureService::default());
        let response = router_with(stub.clone())
            .oneshot(get_request("/api/features?accountId=acct-42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.seen.lock().unwrap().as_deref(), Some("acct-42"));

        let json = body_json(response).await;
        assert_eq!(json["resource"][0]["name"], "CE_BILLING_DATA");
        assert_eq!(json["resource"][0]["enabled"], true);
    }

    #[tokio::test]
    async fn test_empty_account_id_is_rejected() {
        let stub = Arc::new(StubFeatureService::default());
        let response = router_with(stub)
            .oneshot(get_request("/api/features?accountId="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
