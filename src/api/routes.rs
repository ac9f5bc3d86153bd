//! Router configuration for the API.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration, so the request-id
/// middleware runs first and the logging middleware sees its request ID.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/alerts", handlers::alerts::alert_routes())
        .nest("/cost", handlers::cost_health::cost_health_routes())
        .nest("/learning-exp", handlers::log_analysis::log_analysis_routes())
        .nest("/features", handlers::features::feature_routes())
        .nest(
            "/service-instances",
            handlers::service_instances::service_instance_routes(),
        )
        .nest("/version", handlers::version::version_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
