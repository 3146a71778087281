use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A user's self-reported questionnaire, the sole input to risk analysis.
/// Immutable once stored; a user may end up with several rows, in which case
/// lookups take the earliest one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Questionnaire {
    pub id: i64,
    pub user_id: i64,
    pub investment_goal: String,
    pub savings_habit: String,
    pub risk_tolerance: String,
    pub created_at: OffsetDateTime,
}
