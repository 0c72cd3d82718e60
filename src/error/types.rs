/**
 * Error Taxonomy
 *
 * This module defines the single error type every handler returns. Each
 * variant maps to one HTTP status and all of them render the same JSON
 * body shape, so clients see a uniform error surface.
 *
 * # Status Mapping
 *
 * - `Validation` - 400 Bad Request (malformed or missing fields)
 * - `Conflict` - 400 Bad Request (duplicate username/email)
 * - `Unauthenticated` - 401 Unauthorized (missing/invalid token or credentials)
 * - `Forbidden` - 403 Forbidden (authenticated but not the resource owner)
 * - `NotFound` - 404 Not Found
 * - `Database` / `Internal` - 500 Internal Server Error
 *
 * Internal errors keep their real message out of the response body; the
 * exception middleware re-attaches it in development mode.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Message used for every credential failure so responses never leak
/// whether the username or the password was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials.";

/// All errors a request handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing required fields
    #[error("{0}")]
    Validation(String),

    /// Missing/invalid token, or bad credentials
    #[error("Invalid Credentials.")]
    Unauthenticated,

    /// Authenticated but not the owner of the resource
    #[error("You do not own this resource.")]
    Forbidden,

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username or email
    #[error("{0}")]
    Conflict(String),

    /// Database failure that is not a not-found or a unique violation
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Anything else unexpected
    #[error("{0}")]
    Internal(String),
}

/// Uniform JSON error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub details: Option<String>,
}

/// Internal error detail attached to 500 responses as an extension so the
/// exception middleware can expose it in development mode.
#[derive(Debug, Clone)]
pub struct InternalErrorDetails(pub String);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to clients. Internal errors are masked.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found.".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("Username or Email already exists.".to_string())
            }
            _ => ApiError::Database(err),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("password hashing failed: {err}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Internal(format!("token handling failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {self}");
        } else {
            tracing::warn!("Request rejected ({}): {self}", status.as_u16());
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.public_message(),
            details: None,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            response
                .extensions_mut()
                .insert(InternalErrorDetails(self.to_string()));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_masked() {
        let err = ApiError::Internal("connection pool exhausted".into());
        assert_eq!(err.public_message(), "Internal Server Error");

        let err = ApiError::NotFound("Question not found.".into());
        assert_eq!(err.public_message(), "Question not found.");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_response_carries_details_extension() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<InternalErrorDetails>().is_some());
    }

    #[test]
    fn test_client_error_response_has_no_details_extension() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.extensions().get::<InternalErrorDetails>().is_none());
    }

    #[test]
    fn test_error_body_is_camel_case() {
        let body = ErrorBody {
            status_code: 500,
            message: "Internal Server Error".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("statusCode").is_some());
        assert!(json.get("message").is_some());
    }
}
