//! Request validation run before handler dispatch.
//!
//! Query parameters are validated eagerly by the [`ValidatedQuery`]
//! extractor so handlers only ever see well-formed input. The
//! skip-assertion check implements the shared "valid skip assertion"
//! contract used by request DTOs that carry conditional-skip expressions.

use std::sync::LazyLock;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use regex::Regex;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// Query extractor that runs `Validate` after deserialization and rejects
/// with a structured 400 before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

/// Expression syntax accepted for skip assertions: `<+...>`
static SKIP_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<\+[^<>]+>$").unwrap());

/// Validates a skip assertion: either a boolean literal or a `<+...>`
/// expression to be evaluated at execution time.
pub fn validate_skip_assertion(assertion: &str) -> Result<(), ValidationError> {
    let trimmed = assertion.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
        return Ok(());
    }
    if SKIP_EXPRESSION.is_match(trimmed) {
        return Ok(());
    }
    Err(ValidationError::new("skip_assertion")
        .with_message("Skip assertion must be a boolean literal or a <+...> expression".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct TestParams {
        #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
        limit: u32,
        #[validate(custom(function = validate_skip_assertion))]
        skip_assertion: Option<String>,
    }

    async fn handler(ValidatedQuery(params): ValidatedQuery<TestParams>) -> String {
        format!("limit={}", params.limit)
    }

    fn router() -> Router {
        Router::new().route("/test", get(handler))
    }

    #[tokio::test]
    async fn test_valid_query_reaches_handler() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/test?limit=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_out_of_range_limit_is_rejected_before_dispatch() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/test?limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_query_is_bad_request() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/test?limit=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_skip_assertion_accepts_boolean_literals() {
        assert!(validate_skip_assertion("true").is_ok());
        assert!(validate_skip_assertion("False").is_ok());
        assert!(validate_skip_assertion(" true ").is_ok());
    }

    #[test]
    fn test_skip_assertion_accepts_expressions() {
        assert!(validate_skip_assertion("<+pipeline.stage.skipped>").is_ok());
        assert!(validate_skip_assertion("<+env.type == 'Production'>").is_ok());
    }

    #[test]
    fn test_skip_assertion_rejects_other_input() {
        assert!(validate_skip_assertion("").is_err());
        assert!(validate_skip_assertion("yes").is_err());
        assert!(validate_skip_assertion("<pipeline>").is_err());
        assert!(validate_skip_assertion("<+unclosed").is_err());
    }

    #[tokio::test]
    async fn test_invalid_skip_assertion_in_query_is_rejected() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/test?limit=10&skip_assertion=yes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
