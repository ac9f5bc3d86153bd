//! Experimental log-analysis info handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::LOG_ANALYSIS_TAG;
use crate::api::dto::{AccountScope, ExpAnalysisInfo, RestResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn log_analysis_routes() -> Router<AppState> {
    Router::new().route("/exp-analysis-info", get(get_exp_analysis_info))
}

/// GET /api/learning-exp/exp-analysis-info - Experimental analysis records
#[utoipa::path(
    get,
    path = "/api/learning-exp/exp-analysis-info",
    tag = LOG_ANALYSIS_TAG,
    params(AccountScope),
    responses(
        (status = 200, description = "Experimental analysis records", body = RestResponse<Vec<ExpAnalysisInfo>>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub(crate) async fn get_exp_analysis_info(
    State(state): State<AppState>,
    ValidatedQuery(_scope): ValidatedQuery<AccountScope>,
) -> AppResult<Json<RestResponse<Vec<ExpAnalysisInfo>>>> {
    let records = state.services.log_analysis.get_exp_analysis_info_list().await?;
    Ok(Json(RestResponse::new(records)))
}
