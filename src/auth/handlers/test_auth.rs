/**
 * Test-Auth Handler
 *
 * A protected greeting endpoint used to check that token verification is
 * wired up correctly (GET /api/v1/auth/test-auth).
 */

use axum::response::Json;
use serde_json::{json, Value};

use crate::middleware::auth::AuthUser;

/// Returns a greeting with the caller's identity claims.
pub async fn test_auth(AuthUser(user): AuthUser) -> Json<Value> {
    Json(json!({
        "message": format!("Hello {}! (ID: {}). This is a protected endpoint.", user.username, user.user_id),
        "userId": user.user_id,
        "username": user.username,
    }))
}
