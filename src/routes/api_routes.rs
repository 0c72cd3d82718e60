/**
 * API Route Handlers
 *
 * Route configuration for the versioned API surface under `/api/v1`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/v1/auth/register` - user registration
 * - `POST /api/v1/auth/login` - user login, returns a token
 * - `GET /api/v1/auth/test-auth` - protected greeting (auth)
 *
 * ## Notes
 * - `GET /api/v1/notes` / `GET /api/v1/notes/{id}` - public reads
 * - `POST`/`PUT`/`DELETE` - authenticated writes, owner-checked mutation
 *
 * ## Questions & Answers
 * - `GET /api/v1/questions` / `GET /api/v1/questions/{id}` - public reads
 * - `POST /api/v1/questions` - create (auth)
 * - `POST /api/v1/questions/{question_id}/answers` - answer (auth)
 *
 * ## Notifications
 * - `GET /api/v1/notifications/stream` - SSE stream (token at connect)
 * - `POST /api/v1/notifications/test` - test message to own group (auth)
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::answers::handlers::{create_answer, test_notification};
use crate::auth::handlers::{login, register, test_auth};
use crate::middleware::auth::auth_middleware;
use crate::notes::handlers::{create_note, delete_note, get_note, list_notes, update_note};
use crate::notifications::subscription::notification_stream;
use crate::questions::handlers::{create_question, get_question, list_questions};
use crate::server::state::AppState;

/// Routes that do not require a verified token up front. The notification
/// stream authenticates inside the handler because EventSource clients
/// pass the token as a query parameter.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/notes", get(list_notes))
        .route("/api/v1/notes/{id}", get(get_note))
        .route("/api/v1/questions", get(list_questions))
        .route("/api/v1/questions/{id}", get(get_question))
        .route("/api/v1/notifications/stream", get(notification_stream))
}

/// Routes behind the token-verification middleware.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/test-auth", get(test_auth))
        .route("/api/v1/notes", post(create_note))
        .route("/api/v1/notes/{id}", put(update_note).delete(delete_note))
        .route("/api/v1/questions", post(create_question))
        .route(
            "/api/v1/questions/{question_id}/answers",
            post(create_answer),
        )
        .route("/api/v1/notifications/test", post(test_notification))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state,
            auth_middleware,
        ))
}
