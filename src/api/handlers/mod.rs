//! HTTP request handlers, one module per resource.
//!
//! Every handler follows the same contract: bind query parameters, make
//! exactly one collaborator call, wrap the result in the response envelope.
//! No business logic lives here.

pub mod alerts;
pub mod cost_health;
pub mod features;
pub mod log_analysis;
pub mod service_instances;
pub mod version;

#[cfg(test)]
pub(crate) mod testutil {
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use http_body_util::BodyExt;

    use crate::services::Services;
    use crate::state::AppState;

    pub(crate) fn test_state(services: Services) -> AppState {
        AppState::new(services)
    }

    pub(crate) fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub(crate) async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}
