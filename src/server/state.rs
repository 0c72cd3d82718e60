/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `PgPool` is internally reference-counted and cloneable
 * - `NotificationGroups` wraps its map in `Arc<Mutex<..>>`
 * - `ServerConfig` is plain immutable data, cloned per extraction
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::notifications::NotificationGroups;
use crate::server::config::ServerConfig;

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Per-user notification group registry.
    ///
    /// Maps authenticated user ids to broadcast channels; one channel per
    /// user, one receiver per live connection.
    pub notification_groups: NotificationGroups,

    /// Server configuration (token secret, environment, ...).
    pub config: ServerConfig,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for NotificationGroups {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notification_groups.clone()
    }
}

impl FromRef<AppState> for ServerConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
