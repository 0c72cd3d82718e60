/**
 * Notes Handlers
 *
 * CRUD endpoints for study notes. Reads are public; writes require an
 * authenticated caller, and update/delete additionally require that the
 * caller owns the note.
 *
 * # Routes
 *
 * - `GET /api/v1/notes` - list (pagination + search)
 * - `GET /api/v1/notes/{id}` - fetch one
 * - `POST /api/v1/notes` - create (auth)
 * - `PUT /api/v1/notes/{id}` - full replace of mutable fields (auth + owner)
 * - `DELETE /api/v1/notes/{id}` - delete (auth + owner)
 */

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::notes::db;
use crate::pagination::QueryParameters;
use crate::server::state::AppState;

const MAX_TITLE_LEN: usize = 200;

/// Create/update request body.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    pub title: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
}

/// Note representation returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
}

impl From<db::NoteWithAuthor> for NoteResponse {
    fn from(note: db::NoteWithAuthor) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            file_url: note.file_url,
            created_at: note.created_at,
            author_username: note.author_username,
        }
    }
}

/// Validate a note payload.
pub fn validate_note(request: &NoteRequest) -> Result<(), ApiError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("Title is required.".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters."
        )));
    }
    Ok(())
}

/// List notes with pagination and optional search.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<QueryParameters>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = db::list_notes(&state.db_pool, &params).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Fetch a single note.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = db::get_note_with_author(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Note not found.".to_string()))?;

    Ok(Json(NoteResponse::from(note)))
}

/// Create a note owned by the caller.
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<NoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_note(&request)?;

    let note = db::create_note(
        &state.db_pool,
        user.user_id,
        request.title.trim(),
        request.content.as_deref(),
        request.file_url.as_deref(),
    )
    .await?;

    tracing::info!("Note created: {} by {}", note.id, user.username);

    let location = format!("/api/v1/notes/{}", note.id);
    let body = NoteResponse {
        id: note.id,
        title: note.title,
        content: note.content,
        file_url: note.file_url,
        created_at: note.created_at,
        author_username: user.username,
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    ))
}

/// Replace a note's mutable fields. Owner only.
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<NoteRequest>,
) -> Result<StatusCode, ApiError> {
    validate_note(&request)?;

    let note = db::get_note(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Note not found.".to_string()))?;

    if note.user_id != user.user_id {
        tracing::warn!(
            "User {} attempted to update note {} owned by {}",
            user.user_id,
            note.id,
            note.user_id
        );
        return Err(ApiError::Forbidden);
    }

    db::update_note(
        &state.db_pool,
        id,
        request.title.trim(),
        request.content.as_deref(),
        request.file_url.as_deref(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a note. Owner only.
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let note = db::get_note(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Note not found.".to_string()))?;

    if note.user_id != user.user_id {
        tracing::warn!(
            "User {} attempted to delete note {} owned by {}",
            user.user_id,
            note.id,
            note.user_id
        );
        return Err(ApiError::Forbidden);
    }

    db::delete_note(&state.db_pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(title: &str) -> NoteRequest {
        NoteRequest {
            title: title.to_string(),
            content: None,
            file_url: None,
        }
    }

    #[test]
    fn test_title_required() {
        assert_matches!(validate_note(&request("")), Err(ApiError::Validation(_)));
        assert_matches!(validate_note(&request("   ")), Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_title_length_cap() {
        assert!(validate_note(&request(&"a".repeat(200))).is_ok());
        assert_matches!(
            validate_note(&request(&"a".repeat(201))),
            Err(ApiError::Validation(_))
        );
    }

    #[test]
    fn test_optional_fields_accepted() {
        let req = NoteRequest {
            title: "Lecture 3".to_string(),
            content: Some("Derivatives".to_string()),
            file_url: Some("/static/lecture3.pdf".to_string()),
        };
        assert!(validate_note(&req).is_ok());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = NoteResponse {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            content: None,
            file_url: Some("/static/f.pdf".to_string()),
            created_at: Utc::now(),
            author_username: "alice".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("fileUrl").is_some());
        assert!(json.get("authorUsername").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
