/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: database
 * pool creation, migrations, state construction, and route configuration.
 *
 * # Initialization Steps
 *
 * 1. Connect the PostgreSQL pool (a missing database is a startup error)
 * 2. Run migrations
 * 3. Create the notification group registry
 * 4. Assemble `AppState` and the router
 * 5. Spawn the periodic idle-group cleanup task
 */

use axum::Router;
use sqlx::PgPool;

use crate::notifications::NotificationGroups;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Interval between idle notification group sweeps.
const GROUP_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(300);

/// Create and configure the Axum application.
///
/// Fails when the database is unreachable; unlike migrations, a missing
/// database is not something the server can run without.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing StudyHub backend server");

    tracing::info!("Connecting to database...");
    let db_pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&db_pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            // Migrations may already have been applied out of band.
            tracing::error!("Failed to run database migrations: {e}");
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    let notification_groups = NotificationGroups::new();

    let app_state = AppState {
        db_pool,
        notification_groups: notification_groups.clone(),
        config,
    };

    let app = create_router(app_state);

    // Periodically drop group channels with no live connections so the
    // registry does not grow with every user that ever connected.
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(GROUP_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            notification_groups.cleanup_idle_groups();
            tracing::debug!("Cleaned up idle notification groups");
        }
    });

    tracing::info!("Router configured with periodic cleanup task");

    Ok(app)
}
