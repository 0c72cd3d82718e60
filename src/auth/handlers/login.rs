/**
 * Login Handler
 *
 * This module implements user authentication for POST /api/v1/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username (case-insensitive)
 * 2. Recompute the password hash with the stored salt and compare
 * 3. Issue a signed identity token (24-hour expiry)
 *
 * # Security
 *
 * - An unknown username and a wrong password produce the identical 401
 *   response, so callers cannot probe which accounts exist
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::create_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password (same message)
/// * `500 Internal Server Error` - database or token generation failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.username);
            ApiError::Unauthenticated
        })?;

    let valid = verify_password(&request.password, &user.password_hash, &user.password_salt)?;
    if !valid {
        tracing::warn!("Login failed for: {}", request.username);
        return Err(ApiError::Unauthenticated);
    }

    let token = create_token(&state.config.token_secret, user.id, &user.username)?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use crate::error::{ApiError, INVALID_CREDENTIALS};

    // Both failure paths collapse onto the one Unauthenticated variant, so
    // the response body cannot reveal which check failed.
    #[test]
    fn test_credential_failures_share_one_message() {
        let unknown_user = ApiError::Unauthenticated;
        let wrong_password = ApiError::Unauthenticated;
        assert_eq!(unknown_user.to_string(), wrong_password.to_string());
        assert_eq!(unknown_user.to_string(), INVALID_CREDENTIALS);
    }
}
