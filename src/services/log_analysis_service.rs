//! Experimental log-analysis collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::dto::{AnalysisType, ExpAnalysisInfo};
use crate::error::AppResult;

/// Collaborator serving experimental log-analysis summaries.
#[async_trait]
pub trait LogAnalysisService: Send + Sync {
    /// Returns the full list of experimental analysis records.
    async fn get_exp_analysis_info_list(&self) -> AppResult<Vec<ExpAnalysisInfo>>;
}

/// In-memory analysis record list, fixed at construction.
#[derive(Clone, Default)]
pub struct InMemoryLogAnalysisService {
    records: Arc<Vec<ExpAnalysisInfo>>,
}

impl InMemoryLogAnalysisService {
    pub fn new(records: Vec<ExpAnalysisInfo>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn seeded() -> Self {
        let now = jiff::Timestamp::now().as_millisecond();
        Self::new(vec![
            ExpAnalysisInfo {
                state_execution_id: "se-4f2a".to_string(),
                app_id: "app-payments".to_string(),
                analysis_type: AnalysisType::LogMl,
                env_id: "env-prod".to_string(),
                workflow_execution_id: "we-901c".to_string(),
                created_at: now,
            },
            ExpAnalysisInfo {
                state_execution_id: "se-7b19".to_string(),
                app_id: "app-orders".to_string(),
                analysis_type: AnalysisType::FeedbackAnalysis,
                env_id: "env-qa".to_string(),
                workflow_execution_id: "we-3d4e".to_string(),
                created_at: now,
            },
        ])
    }
}

#[async_trait]
impl LogAnalysisService for InMemoryLogAnalysisService {
    async fn get_exp_analysis_info_list(&self) -> AppResult<Vec<ExpAnalysisInfo>> {
        Ok(self.records.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_records_in_construction_order() {
        let service = InMemoryLogAnalysisService::seeded();
        let records = service.get_exp_analysis_info_list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state_execution_id, "se-4f2a");
        assert_eq!(records[1].analysis_type, AnalysisType::FeedbackAnalysis);
    }
}
