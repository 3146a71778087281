use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    onboarding::{
        analysis,
        dto::{AnalysisResponse, QuestionnaireRequest},
        repo::Questionnaire,
    },
    state::AppState,
};

pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/questionnaire", post(submit_questionnaire))
        .route("/analysis/:user_id", get(get_analysis))
}

#[instrument(skip(state, payload))]
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Json(payload): Json<QuestionnaireRequest>,
) -> Result<(StatusCode, Json<Questionnaire>), (StatusCode, String)> {
    let questionnaire = match Questionnaire::create(
        &state.db,
        payload.user_id,
        &payload.investment_goal,
        &payload.savings_habit,
        &payload.risk_tolerance,
    )
    .await
    {
        Ok(q) => q,
        Err(e) => {
            error!(error = %e, user_id = payload.user_id, "create questionnaire failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(user_id = questionnaire.user_id, questionnaire_id = questionnaire.id, "questionnaire stored");
    Ok((StatusCode::CREATED, Json(questionnaire)))
}

#[instrument(skip(state))]
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<AnalysisResponse>, (StatusCode, String)> {
    let questionnaire = match Questionnaire::find_first_by_user(&state.db, user_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            info!(user_id, "no questionnaire for analysis");
            return Err((StatusCode::NOT_FOUND, "Questionnaire not found".into()));
        }
        Err(e) => {
            error!(error = %e, user_id, "find questionnaire failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let assessment = analysis::assess(&questionnaire);
    Ok(Json(AnalysisResponse {
        user_id,
        summary: assessment.summary,
        risk_score: assessment.risk_score,
        investment_recommendation: assessment.recommendation.to_string(),
    }))
}
