use serde::Deserialize;

use crate::recommendations::repo_types::RecommendationStatus;

/// Request body for creating a recommendation. Status is optional and
/// defaults to pending.
#[derive(Debug, Deserialize)]
pub struct CreateRecommendationRequest {
    pub user_id: i64,
    pub description: String,
    #[serde(default)]
    pub status: RecommendationStatus,
}

/// Request body for a status update.
#[derive(Debug, Deserialize)]
pub struct UpdateRecommendationRequest {
    pub status: RecommendationStatus,
}
