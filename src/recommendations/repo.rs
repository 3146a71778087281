pub use crate::recommendations::repo_types::{Recommendation, RecommendationStatus};
use sqlx::PgPool;

impl Recommendation {
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        description: &str,
        status: RecommendationStatus,
    ) -> anyhow::Result<Recommendation> {
        let recommendation = sqlx::query_as::<_, Recommendation>(
            r#"
            INSERT INTO recommendations (user_id, description, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, description, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(status)
        .fetch_one(db)
        .await?;
        Ok(recommendation)
    }

    pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<Recommendation>> {
        let rows = sqlx::query_as::<_, Recommendation>(
            r#"
            SELECT id, user_id, description, status, created_at
            FROM recommendations
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Update the status of a recommendation; None if no such id.
    pub async fn update_status(
        db: &PgPool,
        id: i64,
        status: RecommendationStatus,
    ) -> anyhow::Result<Option<Recommendation>> {
        let recommendation = sqlx::query_as::<_, Recommendation>(
            r#"
            UPDATE recommendations
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, description, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(recommendation)
    }
}
