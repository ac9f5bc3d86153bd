//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `envelope` - The uniform response envelope
//! - `page` - Pagination request/response wrappers
//! - `scim` - SCIM protocol error body
//! - one module per resource payload

mod alert;
mod analysis;
mod cost;
mod envelope;
mod feature;
mod instance;
mod page;
mod scim;
mod scope;
mod version;

pub use alert::{Alert, AlertSeverity, AlertStatus};
pub use analysis::{AnalysisType, ExpAnalysisInfo};
pub use cost::{CeHealthStatus, ClusterHealthStatus};
pub use envelope::{MessageLevel, ResponseMessage, RestResponse};
pub use feature::FeatureAvailability;
pub use instance::ServiceInstance;
pub use page::{PageRequest, PageResponse, SortOrder};
pub use scim::{SCIM_ERROR_SCHEMA, ScimError};
pub use scope::{AccountScope, CostHealthParams};
pub use version::VersionInfo;
