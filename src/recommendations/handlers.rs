use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    recommendations::{
        dto::{CreateRecommendationRequest, UpdateRecommendationRequest},
        repo::Recommendation,
    },
    state::AppState,
};

pub fn recommendation_routes() -> Router<AppState> {
    // The path parameter is a user id on GET and a recommendation id on PUT.
    Router::new()
        .route("/recommendations", post(create_recommendation))
        .route(
            "/recommendations/:id",
            get(list_recommendations).put(update_recommendation),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecommendationRequest>,
) -> Result<(StatusCode, Json<Recommendation>), (StatusCode, String)> {
    let recommendation = match Recommendation::create(
        &state.db,
        payload.user_id,
        &payload.description,
        payload.status,
    )
    .await
    {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, user_id = payload.user_id, "create recommendation failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(
        user_id = recommendation.user_id,
        recommendation_id = recommendation.id,
        "recommendation stored"
    );
    Ok((StatusCode::CREATED, Json(recommendation)))
}

#[instrument(skip(state))]
pub async fn list_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Recommendation>>, (StatusCode, String)> {
    let recommendations = Recommendation::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id, "list recommendations failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;
    Ok(Json(recommendations))
}

#[instrument(skip(state, payload))]
pub async fn update_recommendation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecommendationRequest>,
) -> Result<Json<Recommendation>, (StatusCode, String)> {
    match Recommendation::update_status(&state.db, id, payload.status).await {
        Ok(Some(recommendation)) => {
            info!(recommendation_id = id, status = ?payload.status, "recommendation updated");
            Ok(Json(recommendation))
        }
        Ok(None) => {
            warn!(recommendation_id = id, "recommendation not found");
            Err((StatusCode::NOT_FOUND, "Recommendation not found".into()))
        }
        Err(e) => {
            error!(error = %e, recommendation_id = id, "update recommendation failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
