/**
 * Server Initialization
 *
 * Builds the Axum application: chooses the store, wires the state and
 * assembles the router.
 *
 * # Initialization Process
 *
 * 1. Select the store: PostgreSQL when `DATABASE_URL` is set, otherwise the
 *    in-memory store
 * 2. Run migrations against PostgreSQL
 * 3. Create the application state
 * 4. Create the router
 *
 * A configured database that cannot be reached is a startup error; the
 * server never silently falls back to memory in that case.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryUserStore, PgUserStore, StoreError, UserStore};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns a [`StoreError`] when the configured database cannot be reached
/// or its migrations fail.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing groupnotes backend server");

    let store = load_store(config).await?;
    Ok(create_app_with_store(store, config))
}

/// Create the application around an existing store
pub fn create_app_with_store(store: Arc<dyn UserStore>, config: &ServerConfig) -> Router<()> {
    let app_state = AppState::new(store, config);
    let app = create_router(app_state, config);
    tracing::info!("Router configured");
    app
}

async fn load_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let store = PgUserStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}
