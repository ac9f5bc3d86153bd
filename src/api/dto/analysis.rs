//! Experimental log-analysis DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary record for one experimental log-analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpAnalysisInfo {
    pub state_execution_id: String,
    pub app_id: String,
    pub analysis_type: AnalysisType,
    pub env_id: String,
    pub workflow_execution_id: String,
    /// Epoch milliseconds at which the analysis record was created
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisType {
    LogMl,
    LogCluster,
    FeedbackAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AnalysisType::LogMl).unwrap(),
            "\"LOG_ML\""
        );
        assert_eq!(
            serde_json::to_string(&AnalysisType::FeedbackAnalysis).unwrap(),
            "\"FEEDBACK_ANALYSIS\""
        );
    }
}
