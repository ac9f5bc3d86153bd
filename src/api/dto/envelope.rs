//! The uniform response envelope shared by every resource.
//!
//! Existing platform clients parse these exact key names (`metaData`,
//! `resource`, `responseMessages`), so the wire shape here is frozen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic wrapper placed around every successful response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T> {
    /// Auxiliary key/value metadata, empty for plain resource responses
    #[serde(default)]
    pub meta_data: HashMap<String, serde_json::Value>,

    /// The payload returned by the service collaborator
    pub resource: Option<T>,

    /// Informational or error messages attached to the response
    #[serde(default)]
    pub response_messages: Vec<ResponseMessage>,
}

/// Severity of a [`ResponseMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageLevel {
    Info,
    Warn,
    Error,
}

/// A single entry in the envelope's `responseMessages` array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    /// Machine-readable error code, e.g. `INVALID_REQUEST`
    pub code: String,
    pub level: MessageLevel,
    pub message: String,
}

impl<T> RestResponse<T> {
    /// Wraps a collaborator's return value without transformation.
    pub fn new(resource: T) -> Self {
        Self {
            meta_data: HashMap::new(),
            resource: Some(resource),
            response_messages: Vec::new(),
        }
    }
}

impl RestResponse<()> {
    /// Builds an error envelope carrying a single error-level message and
    /// no resource, the shape the platform's exception mapper emits.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            meta_data: HashMap::new(),
            resource: None,
            response_messages: vec![ResponseMessage {
                code: code.into(),
                level: MessageLevel::Error,
                message: message.into(),
            }],
        }
    }
}
