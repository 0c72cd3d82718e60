/**
 * Notification Subscription Handler
 *
 * This module implements the persistent-connection endpoint for real-time
 * notifications (`GET /api/v1/notifications/stream`) using Server-Sent
 * Events.
 *
 * # Authentication
 *
 * A valid token is required at connect time. Browsers' `EventSource`
 * cannot set headers, so the token is accepted either as a normal
 * `Authorization: Bearer` header or as an `access_token` query parameter.
 * An invalid or missing token rejects the connection with 401.
 *
 * # Connection Lifecycle
 *
 * On connect the caller joins their own notification group; each message
 * published to that group arrives as a `ReceiveNotification` event whose
 * data is the plain text message. Keep-alive comments maintain the
 * connection. Disconnecting drops the receiver, which removes the
 * connection from the group - no other cleanup is needed.
 */

use axum::{
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::middleware::auth::bearer_token;
use crate::server::state::AppState;

/// SSE event name carried by every notification.
pub const NOTIFICATION_EVENT: &str = "ReceiveNotification";

#[derive(Debug, Deserialize)]
pub struct StreamParams {
    /// Token alternative for EventSource clients.
    pub access_token: Option<String>,
}

/// Open a notification stream for the authenticated caller.
pub async fn notification_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StreamParams>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let header_value = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let token = bearer_token(header_value)
        .or(params.access_token.as_deref())
        .ok_or_else(|| {
            tracing::warn!("Notification stream rejected: no token supplied");
            ApiError::Unauthenticated
        })?;

    let claims = verify_token(&state.config.token_secret, token).map_err(|e| {
        tracing::warn!("Notification stream rejected: invalid token: {e}");
        ApiError::Unauthenticated
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthenticated)?;

    let rx = state.notification_groups.join(user_id);
    tracing::info!(
        "User {} ({}) connected to notification stream ({} connection(s))",
        claims.username,
        user_id,
        state.notification_groups.connection_count(user_id)
    );

    let stream = stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(message) => {
                    let event = Event::default().event(NOTIFICATION_EVENT).data(message);
                    return Some((Ok(event), rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    // Best effort: a slow consumer simply misses messages.
                    tracing::warn!("Notification receiver lagged, skipped {skipped} messages");
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("Notification channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_matches_client_contract() {
        assert_eq!(NOTIFICATION_EVENT, "ReceiveNotification");
    }
}
