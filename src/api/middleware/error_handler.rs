//! Maps AppError onto HTTP responses.
//!
//! Error bodies reuse the standard envelope with a null `resource` and one
//! `responseMessages` entry per failure, matching the platform's global
//! exception mapper. SCIM handlers bypass this mapping via `ScimError`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::{MessageLevel, ResponseMessage, RestResponse};
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match &self {
            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                RestResponse::error("RESOURCE_NOT_FOUND", self.to_string()),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                RestResponse::error("INVALID_REQUEST", message.clone()),
            ),
            AppError::ValidationErrors { errors } => {
                let messages = errors
                    .iter()
                    .map(|e| ResponseMessage {
                        code: "INVALID_ARGUMENT".to_string(),
                        level: MessageLevel::Error,
                        message: format!("{}: {}", e.field, e.message),
                    })
                    .collect();
                let envelope = RestResponse::<()> {
                    meta_data: Default::default(),
                    resource: None,
                    response_messages: messages,
                };
                (StatusCode::BAD_REQUEST, envelope)
            }
            AppError::Service { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RestResponse::error("GENERAL_ERROR", message.clone()),
            ),
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RestResponse::error("UNKNOWN_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}
