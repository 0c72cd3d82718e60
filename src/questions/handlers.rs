/**
 * Questions Handlers
 *
 * Read-heavy endpoints for questions. Questions are append-only: they can
 * be created and read, never updated or deleted through the API.
 *
 * # Routes
 *
 * - `GET /api/v1/questions` - list (pagination + search)
 * - `GET /api/v1/questions/{id}` - question with all its answers
 * - `POST /api/v1/questions` - create (auth)
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
use crate::pagination::QueryParameters;
use crate::questions::db;
use crate::server::state::AppState;

/// Title length bounds (inclusive).
const MIN_TITLE_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 250;

/// Create request body.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub body: String,
}

/// Answer representation embedded in a question detail.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
}

/// Question representation returned to clients. The answer list is only
/// populated on the detail endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
    #[serde(default)]
    pub answers: Vec<AnswerView>,
}

impl From<db::QuestionWithAuthor> for QuestionResponse {
    fn from(question: db::QuestionWithAuthor) -> Self {
        Self {
            id: question.id,
            title: question.title,
            body: question.body,
            created_at: question.created_at,
            author_username: question.author_username,
            answers: Vec::new(),
        }
    }
}

/// Validate a question payload.
pub fn validate_question(request: &CreateQuestionRequest) -> Result<(), ApiError> {
    let title_len = request.title.trim().chars().count();
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&title_len) {
        return Err(ApiError::Validation(format!(
            "Title must be between {MIN_TITLE_LEN} and {MAX_TITLE_LEN} characters."
        )));
    }
    if request.body.trim().is_empty() {
        return Err(ApiError::Validation("Body is required.".to_string()));
    }
    Ok(())
}

/// List questions with pagination and optional search.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QueryParameters>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = db::list_questions(&state.db_pool, &params).await?;
    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// Fetch a question together with all of its answers, oldest first.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = db::get_question_with_author(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    let answers = db::list_answers_for_question(&state.db_pool, id).await?;

    let mut response = QuestionResponse::from(question);
    response.answers = answers
        .into_iter()
        .map(|a| AnswerView {
            id: a.id,
            body: a.body,
            created_at: a.created_at,
            author_username: a.author_username,
        })
        .collect();

    Ok(Json(response))
}

/// Create a question owned by the caller.
pub async fn create_question(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_question(&request)?;

    let question = db::create_question(
        &state.db_pool,
        user.user_id,
        request.title.trim(),
        &request.body,
    )
    .await?;

    tracing::info!("Question created: {} by {}", question.id, user.username);

    let location = format!("/api/v1/questions/{}", question.id);
    let body = QuestionResponse {
        id: question.id,
        title: question.title,
        body: question.body,
        created_at: question.created_at,
        author_username: user.username,
        answers: Vec::new(),
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(title: &str, body: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_title_bounds() {
        // 9 chars: too short
        assert_matches!(
            validate_question(&request("123456789", "body")),
            Err(ApiError::Validation(_))
        );
        // 10 chars: minimum
        assert!(validate_question(&request("1234567890", "body")).is_ok());
        // 250 chars: maximum
        assert!(validate_question(&request(&"a".repeat(250), "body")).is_ok());
        // 251 chars: too long
        assert_matches!(
            validate_question(&request(&"a".repeat(251), "body")),
            Err(ApiError::Validation(_))
        );
    }

    #[test]
    fn test_body_required() {
        assert_matches!(
            validate_question(&request("a valid title", "   ")),
            Err(ApiError::Validation(_))
        );
    }

    #[test]
    fn test_answers_serialize_as_empty_list() {
        let response = QuestionResponse {
            id: Uuid::new_v4(),
            title: "How do lifetimes work?".to_string(),
            body: "Specifically in structs.".to_string(),
            created_at: Utc::now(),
            author_username: "alice".to_string(),
            answers: Vec::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json.get("answers").unwrap().as_array().unwrap().len(), 0);
        assert!(json.get("authorUsername").is_some());
    }
}
