/**
 * Answers Handlers
 *
 * Creating an answer on a question (POST /api/v1/questions/{id}/answers)
 * and the notification side effect: when someone answers another user's
 * question, the question owner's notification group is told about it.
 *
 * Delivery is best-effort. If the owner has no live connection the
 * message is dropped; a delivery problem is logged and swallowed and the
 * answer creation still succeeds. The insert and the publish are not
 * wrapped in any shared transaction.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::answers::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::questions::db::get_question;
use crate::server::state::AppState;

/// Create request body.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateAnswerRequest {
    pub body: String,
}

/// Answer representation returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
}

/// Whether answering this question should notify its owner. Users are not
/// notified about their own answers.
pub fn should_notify(answer_author: Uuid, question_owner: Uuid) -> bool {
    answer_author != question_owner
}

/// The notification text sent to the question owner.
pub fn answer_notification(answering_username: &str, question_title: &str) -> String {
    format!("{answering_username} answered your question '{question_title}'.")
}

/// Create an answer on a question.
///
/// # Errors
///
/// * `400 Bad Request` - empty body
/// * `401 Unauthorized` - missing/invalid token
/// * `404 Not Found` - the question does not exist
pub async fn create_answer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(question_id): Path<Uuid>,
    Json(request): Json<CreateAnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    if request.body.trim().is_empty() {
        return Err(ApiError::Validation("Body is required.".to_string()));
    }

    let question = get_question(&state.db_pool, question_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    let answer = db::create_answer(&state.db_pool, question_id, user.user_id, &request.body).await?;
    tracing::info!("Answer {} saved on question {}", answer.id, question_id);

    if should_notify(user.user_id, question.user_id) {
        let message = answer_notification(&user.username, &question.title);
        let delivered = state
            .notification_groups
            .publish(question.user_id, message);
        if delivered > 0 {
            tracing::info!(
                "Notification delivered to {} connection(s) of user {}",
                delivered,
                question.user_id
            );
        } else {
            // Fire and forget: the owner has no live connection right now.
            tracing::info!(
                "Notification dropped, user {} has no live connections",
                question.user_id
            );
        }
    } else {
        tracing::info!("Author answered their own question, no notification sent");
    }

    Ok(Json(AnswerResponse {
        id: answer.id,
        body: answer.body,
        created_at: answer.created_at,
        author_username: user.username,
    }))
}

/// Send a test notification to the caller's own group
/// (POST /api/v1/notifications/test).
pub async fn test_notification(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Json<Value> {
    let message = format!("Test notification for {}", user.username);
    let delivered = state.notification_groups.publish(user.user_id, message.clone());

    tracing::info!(
        "Test notification for user {}: {} connection(s) reached",
        user.user_id,
        delivered
    );

    Json(json!({
        "success": delivered > 0,
        "sentMessage": message,
        "connectionsReached": delivered,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationGroups;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_notification_for_own_answer() {
        let user = Uuid::new_v4();
        assert!(!should_notify(user, user));
    }

    #[test]
    fn test_notification_for_someone_elses_answer() {
        assert!(should_notify(Uuid::new_v4(), Uuid::new_v4()));
    }

    #[test]
    fn test_notification_text_names_user_and_question() {
        let message = answer_notification("bob", "What is ownership?");
        assert_eq!(message, "bob answered your question 'What is ownership?'.");
        assert!(message.contains("bob"));
        assert!(message.contains("What is ownership?"));
    }

    // End-to-end over the fan-out path: owner holds one live connection,
    // someone else answers, exactly one message arrives.
    #[tokio::test]
    async fn test_owner_connection_receives_exactly_one_message() {
        let groups = NotificationGroups::new();
        let owner = Uuid::new_v4();
        let answerer = Uuid::new_v4();

        let mut owner_rx = groups.join(owner);

        if should_notify(answerer, owner) {
            let message = answer_notification("bob", "What is ownership?");
            assert_eq!(groups.publish(owner, message), 1);
        }

        assert_eq!(
            owner_rx.recv().await.unwrap(),
            "bob answered your question 'What is ownership?'."
        );
        assert!(matches!(
            owner_rx.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_own_answer_sends_nothing() {
        let groups = NotificationGroups::new();
        let owner = Uuid::new_v4();

        let mut owner_rx = groups.join(owner);

        if should_notify(owner, owner) {
            groups.publish(owner, "should never happen".to_string());
        }

        assert!(matches!(
            owner_rx.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
    }
}
