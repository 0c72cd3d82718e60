/**
 * Register Handler
 *
 * This module implements user registration for POST /api/v1/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password
 * 2. Reject when the username or email is already taken (case-insensitive)
 * 3. Derive a fresh salt and hash the password
 * 4. Persist the user and return the safe user representation
 *
 * # Security
 *
 * - Passwords are hashed with a per-user random salt before storage
 * - The response never contains the hash or the salt
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::error::ApiError;

const MAX_USERNAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 8;

/// Validate a registration request, returning the first problem found.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("Username is required.".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ApiError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters."
        )));
    }
    if !request.email.contains('@') {
        return Err(ApiError::Validation("Invalid email format.".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid fields, or username/email already exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!("Register request for username: {}", request.username);

    validate_registration(&request)?;

    // Case-insensitive duplicate checks. A race past these is caught by the
    // unique indexes and surfaces as the same Conflict error.
    if get_user_by_username(&pool, &request.username).await?.is_some()
        || get_user_by_email(&pool, &request.email).await?.is_some()
    {
        tracing::warn!("Duplicate registration attempt: {}", request.username);
        return Err(ApiError::Conflict(
            "Username or Email already exists.".to_string(),
        ));
    }

    let (password_hash, password_salt) = hash_password(&request.password)?;

    let user = create_user(
        &pool,
        request.username.trim(),
        &request.email,
        &password_hash,
        &password_salt,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&request("alice", "alice@example.com", "password123")).is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let result = validate_registration(&request("  ", "alice@example.com", "password123"));
        assert_matches!(result, Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_overlong_username_rejected() {
        let long = "a".repeat(51);
        let result = validate_registration(&request(&long, "alice@example.com", "password123"));
        assert_matches!(result, Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_username_at_limit_accepted() {
        let at_limit = "a".repeat(50);
        assert!(validate_registration(&request(&at_limit, "a@example.com", "password123")).is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = validate_registration(&request("alice", "not-an-email", "password123"));
        assert_matches!(result, Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_short_password_rejected() {
        let result = validate_registration(&request("alice", "alice@example.com", "short"));
        assert_matches!(result, Err(ApiError::Validation(_)));
    }
}
