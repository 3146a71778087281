use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    advisor::{
        dto::{
            AiResponse, FinancialPlanResponse, OnboardingAnswersRequest, ProfileRequest,
            ProgressRequest,
        },
        plan, prompts,
    },
    inference::InferenceError,
    onboarding::{analysis, repo::Questionnaire},
    state::AppState,
};

pub fn advisor_routes() -> Router<AppState> {
    Router::new()
        .route("/ai-onboarding", post(ai_onboarding))
        .route("/ai-analysis", post(ai_analysis))
        .route("/ai-progress", post(ai_progress))
        .route("/financial-plan/:user_id", get(financial_plan))
}

// An upstream inference failure is the provider's fault, not ours.
fn inference_failed(e: InferenceError) -> (StatusCode, String) {
    error!(error = %e, "inference call failed");
    (StatusCode::BAD_GATEWAY, e.to_string())
}

#[instrument(skip(state, payload))]
pub async fn ai_onboarding(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<AiResponse>, (StatusCode, String)> {
    let prompt = prompts::onboarding_questions(&payload);
    let result = state.llm.generate(&prompt).await.map_err(inference_failed)?;
    Ok(Json(AiResponse {
        response: result.into_text(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn ai_analysis(
    State(state): State<AppState>,
    Json(payload): Json<OnboardingAnswersRequest>,
) -> Result<Json<AiResponse>, (StatusCode, String)> {
    let prompt = prompts::analysis_report(&payload.answers);
    let result = state.llm.generate(&prompt).await.map_err(inference_failed)?;
    info!(user_id = payload.user_id, "analysis report generated");
    Ok(Json(AiResponse {
        response: result.into_text(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn ai_progress(
    State(state): State<AppState>,
    Json(payload): Json<ProgressRequest>,
) -> Result<Json<AiResponse>, (StatusCode, String)> {
    let prompt = prompts::progress_insights(&payload.response);
    let result = state.llm.generate(&prompt).await.map_err(inference_failed)?;
    Ok(Json(AiResponse {
        response: result.into_text(),
    }))
}

/// The plan is grounded in the user's stored questionnaire: its risk
/// assessment summary is the analysis report the model plans against.
#[instrument(skip(state))]
pub async fn financial_plan(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<FinancialPlanResponse>, (StatusCode, String)> {
    let questionnaire = match Questionnaire::find_first_by_user(&state.db, user_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            info!(user_id, "no questionnaire for financial plan");
            return Err((StatusCode::NOT_FOUND, "Questionnaire not found".into()));
        }
        Err(e) => {
            error!(error = %e, user_id, "find questionnaire failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let assessment = analysis::assess(&questionnaire);
    let prompt = prompts::financial_plan(&assessment.summary);
    let result = state.llm.generate(&prompt).await.map_err(inference_failed)?;

    info!(user_id, "financial plan generated");
    Ok(Json(plan::split_plan_sections(&result.into_text())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ai_onboarding_returns_normalized_generation() {
        let state = AppState::fake();
        let profile = ProfileRequest {
            full_name: "Grace Hopper".into(),
            age: 45,
            sex: "F".into(),
            tax_status: "married".into(),
            state: "VA".into(),
            city: "Arlington".into(),
        };

        let Json(body) = ai_onboarding(State(state), Json(profile))
            .await
            .expect("fake inference never fails");
        assert!(body.response.starts_with("echo: "));
        assert!(body.response.contains("Grace Hopper"));
    }

    #[tokio::test]
    async fn ai_progress_feeds_progress_data_through() {
        let state = AppState::fake();
        let Json(body) = ai_progress(
            State(state),
            Json(ProgressRequest {
                response: "2 of 3 recommendations complete".into(),
            }),
        )
        .await
        .expect("fake inference never fails");
        assert!(body.response.contains("2 of 3 recommendations complete"));
    }
}
