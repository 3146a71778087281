use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Lifecycle of an advisor recommendation. Stored as a Postgres enum, so
/// unknown values cannot reach the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recommendation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    InProgress,
    Complete,
}

impl Default for RecommendationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// An actionable recommendation tracked for a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub status: RecommendationStatus,
    pub created_at: OffsetDateTime,
}
