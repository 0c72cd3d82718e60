//! Database operations for study notes.
//!
//! List queries join the author's username; ownership checks fetch the raw
//! record first so mutation handlers can compare owner ids before touching
//! anything.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::pagination::QueryParameters;

/// A note row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NoteRecord {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

/// A note joined with its author's username, as returned by reads.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NoteWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
}

/// List notes, newest first, optionally filtered by a case-insensitive
/// substring match on title or content.
pub async fn list_notes(
    pool: &PgPool,
    params: &QueryParameters,
) -> Result<Vec<NoteWithAuthor>, sqlx::Error> {
    match params.search_pattern() {
        Some(pattern) => {
            sqlx::query_as::<_, NoteWithAuthor>(
                r#"
                SELECT n.id, n.title, n.content, n.file_url, n.created_at,
                       u.username AS author_username
                FROM notes n
                JOIN users u ON u.id = n.user_id
                WHERE n.title ILIKE $1 OR n.content ILIKE $1
                ORDER BY n.created_at DESC
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
            sqlx::query_as::<_, NoteWithAuthor>(
                r#"
                SELECT n.id, n.title, n.content, n.file_url, n.created_at,
                       u.username AS author_username
                FROM notes n
                JOIN users u ON u.id = n.user_id
                ORDER BY n.created_at DESC
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

/// Get a note joined with its author's username.
pub async fn get_note_with_author(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<NoteWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, NoteWithAuthor>(
        r#"
        SELECT n.id, n.title, n.content, n.file_url, n.created_at,
               u.username AS author_username
        FROM notes n
        JOIN users u ON u.id = n.user_id
        WHERE n.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get the raw note record (used for ownership checks).
pub async fn get_note(pool: &PgPool, id: Uuid) -> Result<Option<NoteRecord>, sqlx::Error> {
    sqlx::query_as::<_, NoteRecord>(
        r#"
        SELECT id, title, content, file_url, created_at, user_id
        FROM notes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a new note owned by `user_id`.
pub async fn create_note(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    content: Option<&str>,
    file_url: Option<&str>,
) -> Result<NoteRecord, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, NoteRecord>(
        r#"
        INSERT INTO notes (id, title, content, file_url, created_at, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, content, file_url, created_at, user_id
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(file_url)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Replace the mutable fields of a note. The owner is immutable.
pub async fn update_note(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    content: Option<&str>,
    file_url: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE notes
        SET title = $1, content = $2, file_url = $3
        WHERE id = $4
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(file_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a note.
pub async fn delete_note(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
