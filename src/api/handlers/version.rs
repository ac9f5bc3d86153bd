//! Version info handler. Public, no account scoping.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::VERSION_TAG;
use crate::api::dto::{RestResponse, VersionInfo};
use crate::error::AppResult;
use crate::state::AppState;

pub fn version_routes() -> Router<AppState> {
    Router::new().route("/", get(get_version_info))
}

/// GET /api/version - Build and version information
#[utoipa::path(
    get,
    path = "/api/version",
    tag = VERSION_TAG,
    responses(
        (status = 200, description = "Version info", body = RestResponse<VersionInfo>)
    )
)]
pub(crate) async fn get_version_info(
    State(state): State<AppState>,
) -> AppResult<Json<RestResponse<VersionInfo>>> {
    let info = state.services.version.get_version_info().await?;
    Ok(Json(RestResponse::new(info)))
}
