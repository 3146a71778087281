use serde::{Deserialize, Serialize};

/// Request body for questionnaire submission.
#[derive(Debug, Deserialize)]
pub struct QuestionnaireRequest {
    pub user_id: i64,
    pub investment_goal: String,
    pub savings_habit: String,
    pub risk_tolerance: String,
}

/// Derived analysis for a user; recomputed on every request, never stored.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub user_id: i64,
    pub summary: String,
    pub risk_score: i32,
    pub investment_recommendation: String,
}
