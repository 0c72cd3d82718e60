//! Database operations for answers.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// An answer row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnswerRecord {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub question_id: Uuid,
}

/// Create a new answer authored by `user_id` on `question_id`.
pub async fn create_answer(
    pool: &PgPool,
    question_id: Uuid,
    user_id: Uuid,
    body: &str,
) -> Result<AnswerRecord, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, AnswerRecord>(
        r#"
        INSERT INTO answers (id, body, created_at, user_id, question_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, body, created_at, user_id, question_id
        "#,
    )
    .bind(id)
    .bind(body)
    .bind(now)
    .bind(user_id)
    .bind(question_id)
    .fetch_one(pool)
    .await
}
