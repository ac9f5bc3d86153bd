//! Alert listing handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::ALERT_TAG;
use crate::api::dto::{AccountScope, Alert, PageRequest, PageResponse, RestResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn alert_routes() -> Router<AppState> {
    Router::new().route("/", get(list_alerts))
}

/// GET /api/alerts - List triggered alerts, paged
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    params(AccountScope, PageRequest),
    responses(
        (status = 200, description = "Page of alerts", body = RestResponse<PageResponse<Alert>>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub(crate) async fn list_alerts(
    State(state): State<AppState>,
    ValidatedQuery(_scope): ValidatedQuery<AccountScope>,
    ValidatedQuery(page_request): ValidatedQuery<PageRequest>,
) -> AppResult<Json<RestResponse<PageResponse<Alert>>>> {
    // accountId is bound but scoping is enforced upstream; the collaborator
    // call takes only the page descriptor.
    let page = state.services.alerts.list(page_request).await?;
    Ok(Json(RestResponse::new(page)))
}
