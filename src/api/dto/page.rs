//! Pagination query descriptor and paged result wrapper.
//!
//! The page request is owned by the service layer; handlers bind it from
//! query parameters and thread it through to the collaborator unchanged.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters describing one page of a listing.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based item offset
    #[serde(default)]
    #[param(minimum = 0, example = 0)]
    pub offset: u64,

    /// Maximum number of items to return (max 100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 50)]
    pub limit: u32,

    /// Field to sort by
    #[serde(default)]
    pub sort_by: Option<String>,

    /// Sort direction, ascending when absent
    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    /// Free-text filter applied by the collaborator
    #[serde(default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

fn default_limit() -> u32 {
    50
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            sort_by: None,
            sort_order: None,
            search_term: None,
        }
    }
}

/// One page of results, echoing the request's offset and limit.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items for this page
    pub response: Vec<T>,

    /// Total number of matching items across all pages
    pub total: u64,

    pub offset: u64,
    pub limit: u32,
}

impl<T> PageResponse<T> {
    /// Builds a page from the items selected for it and the overall total.
    pub fn new(response: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            response,
            total,
            offset: request.offset,
            limit: request.limit,
        }
    }
}
