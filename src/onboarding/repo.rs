pub use crate::onboarding::repo_types::Questionnaire;
use sqlx::PgPool;

impl Questionnaire {
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        investment_goal: &str,
        savings_habit: &str,
        risk_tolerance: &str,
    ) -> anyhow::Result<Questionnaire> {
        let questionnaire = sqlx::query_as::<_, Questionnaire>(
            r#"
            INSERT INTO questionnaires (user_id, investment_goal, savings_habit, risk_tolerance)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, investment_goal, savings_habit, risk_tolerance, created_at
            "#,
        )
        .bind(user_id)
        .bind(investment_goal)
        .bind(savings_habit)
        .bind(risk_tolerance)
        .fetch_one(db)
        .await?;
        Ok(questionnaire)
    }

    /// First questionnaire submitted for the user, if any.
    pub async fn find_first_by_user(
        db: &PgPool,
        user_id: i64,
    ) -> anyhow::Result<Option<Questionnaire>> {
        let questionnaire = sqlx::query_as::<_, Questionnaire>(
            r#"
            SELECT id, user_id, investment_goal, savings_habit, risk_tolerance, created_at
            FROM questionnaires
            WHERE user_id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(questionnaire)
    }
}
