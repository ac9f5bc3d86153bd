//! Service instance listing handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::INSTANCE_TAG;
use crate::api::dto::{PageRequest, PageResponse, RestResponse, ServiceInstance};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn service_instance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_service_instances))
}

/// GET /api/service-instances - List deployed service instances, paged
#[utoipa::path(
    get,
    path = "/api/service-instances",
    tag = INSTANCE_TAG,
    params(PageRequest),
    responses(
        (status = 200, description = "Page of service instances", body = RestResponse<PageResponse<ServiceInstance>>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub(crate) async fn list_service_instances(
    State(state): State<AppState>,
    ValidatedQuery(page_request): ValidatedQuery<PageRequest>,
) -> AppResult<Json<RestResponse<PageResponse<ServiceInstance>>>> {
    let page = state.services.instances.list(page_request).await?;
    Ok(Json(RestResponse::new(page)))
}
