/**
 * Server Initialization
 *
 * Builds the application from a validated `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the user store (Postgres: connect and migrate)
 * 2. Derive token keys and the password hasher from the config
 * 3. Create the router over the resulting `AppState`
 *
 * A store that cannot be opened is an error, not a degraded mode: the
 * server has nothing useful to do without one.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::users::{StoreError, UserStore};
use crate::shared::AppConfig;

/// A ready-to-serve router plus the handle needed to shut the store down
pub struct App {
    pub router: Router,
    pub store: Arc<dyn UserStore>,
}

/// Open the configured store and build the application around it
pub async fn create_app(config: &AppConfig) -> Result<App, StoreError> {
    tracing::info!("Initializing userbase server");
    let store = load_store(config).await?;
    Ok(build_app(config, store))
}

/// Build the application over an already-open store
pub fn build_app(config: &AppConfig, store: Arc<dyn UserStore>) -> App {
    let state = AppState::new(config, Arc::clone(&store));
    let router = create_router(state);

    tracing::info!(
        "Router configured (store: {:?}, access guard on /api/users: {})",
        config.store,
        config.require_auth
    );

    App { router, store }
}
