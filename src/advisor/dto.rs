use serde::{Deserialize, Serialize};

/// Profile submitted to get personalized onboarding questions.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub full_name: String,
    pub age: u32,
    pub sex: String,
    pub tax_status: String,
    pub state: String,
    pub city: String,
}

/// Onboarding answers submitted for an analysis report.
#[derive(Debug, Deserialize)]
pub struct OnboardingAnswersRequest {
    pub user_id: i64,
    pub answers: String,
}

/// Progress data arrives under a `response` key on the wire.
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub response: String,
}

/// Normalized generation text, returned by every AI endpoint.
#[derive(Debug, Serialize)]
pub struct AiResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct FinancialPlanResponse {
    pub budget_plan: String,
    pub investment_strategy: String,
    pub retirement_plan: String,
    pub tax_plan: String,
}
