//! Alert listing collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::api::dto::{Alert, AlertSeverity, AlertStatus, PageRequest, PageResponse};
use crate::error::AppResult;

/// Collaborator serving the triggered-alert listing.
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Lists alerts for the given page descriptor.
    async fn list(&self, page_request: PageRequest) -> AppResult<PageResponse<Alert>>;
}

/// In-memory alert store, newest alert first.
#[derive(Clone, Default)]
pub struct InMemoryAlertService {
    alerts: Arc<DashMap<Uuid, Alert>>,
}

impl InMemoryAlertService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a representative set of open alerts.
    pub fn seeded() -> Self {
        let service = Self::new();
        let now = jiff::Timestamp::now().as_millisecond();
        let seeds = [
            (
                "DelegateDown",
                "Delegate prod-delegate-1 disconnected",
                "Setup",
                AlertSeverity::High,
            ),
            (
                "InstancesLimitExceeded",
                "Service instance limit reached for account",
                "Governance",
                AlertSeverity::Medium,
            ),
            (
                "ContinuousVerificationAlert",
                "Verification failed for workflow deploy-api",
                "ContinuousVerification",
                AlertSeverity::Critical,
            ),
        ];
        for (alert_type, title, category, severity) in seeds {
            service.insert(Alert {
                uuid: Uuid::new_v4(),
                account_id: "kmpySmUISimoRrJL6NL73w".to_string(),
                alert_type: alert_type.to_string(),
                status: AlertStatus::Open,
                title: title.to_string(),
                category: category.to_string(),
                severity,
                triggered_at: now,
            });
        }
        service
    }

    pub fn insert(&self, alert: Alert) {
        self.alerts.insert(alert.uuid, alert);
    }
}

#[async_trait]
impl AlertService for InMemoryAlertService {
    async fn list(&self, page_request: PageRequest) -> AppResult<PageResponse<Alert>> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|alert| match &page_request.search_term {
                Some(term) => alert.title.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .collect();
        alerts.sort_by(|a, b| b.triggered_at.cmp(&a.triggered_at).then(a.uuid.cmp(&b.uuid)));

        let total = alerts.len() as u64;
        let items = alerts
            .into_iter()
            .skip(page_request.offset as usize)
            .take(page_request.limit as usize)
            .collect();
        Ok(PageResponse::new(items, total, &page_request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(title: &str, triggered_at: i64) -> Alert {
        Alert {
            uuid: Uuid::new_v4(),
            account_id: "acct-1".to_string(),
            alert_type: "DelegateDown".to_string(),
            status: AlertStatus::Open,
            title: title.to_string(),
            category: "Setup".to_string(),
            severity: AlertSeverity::Low,
            triggered_at,
        }
    }

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let service = InMemoryAlertService::new();
        service.insert(alert("old", 100));
        service.insert(alert("new", 200));

        let page = service
            .list(PageRequest {
                limit: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.response.len(), 1);
        assert_eq!(page.response[0].title, "new");
    }

    #[tokio::test]
    async fn test_list_applies_search_term() {
        let service = InMemoryAlertService::new();
        service.insert(alert("Delegate disconnected", 100));
        service.insert(alert("Limit exceeded", 200));

        let page = service
            .list(PageRequest {
                search_term: Some("delegate".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.response[0].title, "Delegate disconnected");
    }

    #[tokio::test]
    async fn test_list_offset_past_end_is_empty() {
        let service = InMemoryAlertService::new();
        service.insert(alert("only", 100));

        let page = service
            .list(PageRequest {
                offset: 5,
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.response.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.offset, 5);
    }
}
