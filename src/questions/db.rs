//! Database operations for questions and their answers.
//!
//! Question lists are newest-first; a question's answers come back
//! oldest-first so a thread reads top to bottom.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::pagination::QueryParameters;

/// A question row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

/// A question joined with its author's username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub author_username: String,
}

/// An answer joined with its author's username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnswerWithAuthor {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
}

/// List questions, newest first, optionally filtered by a case-insensitive
/// substring match on title or body.
pub async fn list_questions(
    pool: &PgPool,
    params: &QueryParameters,
) -> Result<Vec<QuestionWithAuthor>, sqlx::Error> {
    match params.search_pattern() {
        Some(pattern) => {
            sqlx::query_as::<_, QuestionWithAuthor>(
                r#"
                SELECT q.id, q.title, q.body, q.created_at, q.user_id,
                       u.username AS author_username
                FROM questions q
                JOIN users u ON u.id = q.user_id
                WHERE q.title ILIKE $1 OR q.body ILIKE $1
                ORDER BY q.created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(pattern)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, QuestionWithAuthor>(
                r#"
                SELECT q.id, q.title, q.body, q.created_at, q.user_id,
                       u.username AS author_username
                FROM questions q
                JOIN users u ON u.id = q.user_id
                ORDER BY q.created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(pool)
            .await
        }
    }
}

/// Get the raw question record (used for existence/ownership checks).
pub async fn get_question(pool: &PgPool, id: Uuid) -> Result<Option<QuestionRecord>, sqlx::Error> {
    sqlx::query_as::<_, QuestionRecord>(
        r#"
        SELECT id, title, body, created_at, user_id
        FROM questions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a question joined with its author's username.
pub async fn get_question_with_author(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<QuestionWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, QuestionWithAuthor>(
        r#"
        SELECT q.id, q.title, q.body, q.created_at, q.user_id,
               u.username AS author_username
        FROM questions q
        JOIN users u ON u.id = q.user_id
        WHERE q.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All answers for a question, oldest first.
pub async fn list_answers_for_question(
    pool: &PgPool,
    question_id: Uuid,
) -> Result<Vec<AnswerWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, AnswerWithAuthor>(
        r#"
        SELECT a.id, a.body, a.created_at, u.username AS author_username
        FROM answers a
        JOIN users u ON u.id = a.user_id
        WHERE a.question_id = $1
        ORDER BY a.created_at ASC
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Create a new question owned by `user_id`.
pub async fn create_question(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    body: &str,
) -> Result<QuestionRecord, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, QuestionRecord>(
        r#"
        INSERT INTO questions (id, title, body, created_at, user_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, body, created_at, user_id
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(body)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
