/**
 * Exception Middleware
 *
 * The single boundary where internal failures become client responses.
 * Every 500 rendered by [`ApiError`] carries its real message in a
 * response extension; in production that extension is discarded, while in
 * development this middleware rewrites the body to include the details.
 */

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::error::{ErrorBody, InternalErrorDetails};
use crate::server::state::AppState;

/// Rewrites 500 responses to include error details in development mode.
pub async fn exception_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    let details = match response.extensions().get::<InternalErrorDetails>() {
        Some(details) => details.0.clone(),
        None => return response,
    };

    if !app_state.config.environment.is_development() {
        return response;
    }

    let body = ErrorBody {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message: "Internal Server Error".to_string(),
        details: Some(details),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
