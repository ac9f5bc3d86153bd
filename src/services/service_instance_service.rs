//! Service instance listing collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::api::dto::{PageRequest, PageResponse, ServiceInstance};
use crate::error::AppResult;

/// Collaborator serving the deployed service-instance listing.
#[async_trait]
pub trait ServiceInstanceService: Send + Sync {
    /// Lists service instances for the given page descriptor.
    async fn list(&self, page_request: PageRequest) -> AppResult<PageResponse<ServiceInstance>>;
}

/// In-memory instance store, ordered by host name.
#[derive(Clone, Default)]
pub struct InMemoryServiceInstanceService {
    instances: Arc<DashMap<Uuid, ServiceInstance>>,
}

impl InMemoryServiceInstanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let service = Self::new();
        let now = jiff::Timestamp::now().as_millisecond();
        let seeds = [
            ("app-payments", "env-prod", "payments-api", "ip-10-0-1-12"),
            ("app-payments", "env-prod", "payments-api", "ip-10-0-1-13"),
            ("app-orders", "env-qa", "orders-worker", "ip-10-0-4-7"),
        ];
        for (app_id, env_id, service_name, host_name) in seeds {
            service.insert(ServiceInstance {
                uuid: Uuid::new_v4(),
                app_id: app_id.to_string(),
                env_id: env_id.to_string(),
                service_name: service_name.to_string(),
                host_name: host_name.to_string(),
                infra_mapping_id: format!("infra-{}", env_id),
                last_deployed_at: now,
            });
        }
        service
    }

    pub fn insert(&self, instance: ServiceInstance) {
        self.instances.insert(instance.uuid, instance);
    }
}

#[async_trait]
impl ServiceInstanceService for InMemoryServiceInstanceService {
    async fn list(&self, page_request: PageRequest) -> AppResult<PageResponse<ServiceInstance>> {
        let mut instances: Vec<ServiceInstance> = self
            .instances
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|instance| match &page_request.search_term {
                Some(term) => {
                    let term = term.to_lowercase();
                    instance.service_name.to_lowercase().contains(&term)
                        || instance.host_name.to_lowercase().contains(&term)
                }
                None => true,
            })
            .collect();
        instances.sort_by(|a, b| {
            a.host_name
                .cmp(&b.host_name)
                .then(a.uuid.cmp(&b.uuid))
        });

        let total = instances.len() as u64;
        let items = instances
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

    #[tokio::test]
    async fn test_list_filters_by_service_name() {
        let service = InMemoryServiceInstanceService::seeded();
        let page = service
            .list(PageRequest {
                search_term: Some("orders".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.response[0].service_name, "orders-worker");
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_total() {
        let service = InMemoryServiceInstanceService::seeded();
        let page = service
            .list(PageRequest {
                limit: 2,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.response.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 2);
    }
}
