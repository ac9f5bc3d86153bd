//! SCIM protocol error body (RFC 7644 §3.12).
//!
//! SCIM resource handlers must report failures with the SCIM error shape
//! instead of the generic envelope; this builder produces that body from a
//! caught error and the HTTP status the caller wants to return.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Schema URN carried by every SCIM error body.
pub const SCIM_ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// SCIM-shaped error payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScimError {
    pub schemas: Vec<String>,
    /// Human-readable description of the failure
    pub detail: String,
    /// HTTP status code, duplicated in the body per the SCIM spec
    pub status: u16,
}

impl ScimError {
    /// Builds a SCIM error body from an error's display message and the
    /// target HTTP status.
    pub fn from_error<E: std::fmt::Display>(error: &E, status: StatusCode) -> Self {
        Self {
            schemas: vec![SCIM_ERROR_SCHEMA.to_string()],
            detail: error.to_string(),
            status: status.as_u16(),
        }
    }

    /// Wraps the body in a response carrying the same status code.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("X")]
    struct Conflict;

    #[test]
    fn test_scim_error_from_error() {
        let scim = ScimError::from_error(&Conflict, StatusCode::CONFLICT);
        assert_eq!(scim.detail, "X");
        assert_eq!(scim.status, 409);
        assert_eq!(scim.schemas, vec![SCIM_ERROR_SCHEMA.to_string()]);
    }

    #[test]
    fn test_scim_error_response_status() {
        let scim = ScimError::from_error(&Conflict, StatusCode::CONFLICT);
        let response = scim.into_response_with_status(StatusCode::CONFLICT);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_scim_error_serialization() {
        let scim = ScimError::from_error(&Conflict, StatusCode::CONFLICT);
        let json = serde_json::to_value(&scim).unwrap();
        assert_eq!(json["detail"], "X");
        assert_eq!(json["status"], 409);
        assert_eq!(json["schemas"][0], SCIM_ERROR_SCHEMA);
    }
}
