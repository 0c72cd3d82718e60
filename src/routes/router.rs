/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public API routes (auth, reads, the notification stream)
 * 2. Protected API routes (writes), behind the auth middleware
 * 3. Static file serving under `/static`
 * 4. Fallback handler (404)
 *
 * The exception middleware wraps everything so internal error details are
 * only exposed in development mode, and the permissive CORS layer mirrors
 * the development posture of the frontend setup.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::middleware::errors::exception_middleware;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = public_routes()
        .merge(protected_routes(app_state.clone()))
        .nest_service("/static", ServeDir::new("public"))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            exception_middleware,
        ))
        .layer(CorsLayer::permissive())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
