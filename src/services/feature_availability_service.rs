//! Feature availability collaborator, scoped per account.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::api::dto::FeatureAvailability;
use crate::error::AppResult;

/// Collaborator reporting which features an account can use.
#[async_trait]
pub trait FeatureAvailabilityService: Send + Sync {
    /// Lists feature availability for the given account.
    async fn list_feature_availability(
        &self,
        account_id: &str,
    ) -> AppResult<Vec<FeatureAvailability>>;
}

/// In-memory feature flags; globally-defaulted features plus per-account
/// overrides.
#[derive(Clone, Default)]
pub struct InMemoryFeatureAvailabilityService {
    defaults: Arc<Vec<FeatureAvailability>>,
    overrides: Arc<DashMap<String, Vec<FeatureAvailability>>>,
}

impl InMemoryFeatureAvailabilityService {
    pub fn new(defaults: Vec<FeatureAvailability>) -> Self {
        Self {
            defaults: Arc::new(defaults),
            overrides: Arc::new(DashMap::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            FeatureAvailability {
                name: "CE_BILLING_DATA".to_string(),
                enabled: true,
            },
            FeatureAvailability {
                name: "LOG_ANALYSIS_EXPERIMENTAL".to_string(),
                enabled: false,
            },
            FeatureAvailability {
                name: "NEXT_GEN_DASHBOARDS".to_string(),
                enabled: true,
            },
        ])
    }

    pub fn set_account_overrides(&self, account_id: &str, features: Vec<FeatureAvailability>) {
        self.overrides.insert(account_id.to_string(), features);
    }
}

#[async_trait]
impl FeatureAvailabilityService for InMemoryFeatureAvailabilityService {
    async fn list_feature_availability(
        &self,
        account_id: &str,
    ) -> AppResult<Vec<FeatureAvailability>> {
        match self.overrides.get(account_id) {
            Some(entry) => Ok(entry.value().clone()),
            None => Ok(self.defaults.as_ref().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults_returned_without_overrides() {
        let service = InMemoryFeatureAvailabilityService::seeded();
        let features = service.list_feature_availability("acct-1").await.unwrap();
        assert_eq!(features.len(), 3);
    }

    #[tokio::test]
    async fn test_account_overrides_take_precedence() {
        let service = InMemoryFeatureAvailabilityService::seeded();
        service.set_account_overrides(
            "acct-2",
            vec![FeatureAvailability {
                name: "CE_BILLING_DATA".to_string(),
                enabled: false,
            }],
        );

        let features = service.list_feature_availability("acct-2").await.unwrap();
        assert_eq!(features.len(), 1);
        assert!(!features[0].enabled);

        // Other accounts still see defaults
        let defaults = service.list_feature_availability("acct-1").await.unwrap();
        assert_eq!(defaults.len(), 3);
    }
}
