/**
 * Store Configuration
 *
 * Opens the user store selected by `AppConfig`. For Postgres this connects
 * the pool and runs migrations; any failure is returned to `main`, which
 * exits instead of serving without a store.
 */

use std::sync::Arc;

use sqlx::postgres::PgConnectOptions;

use crate::backend::users::{MemoryUserStore, PgUserStore, StoreError, UserStore};
use crate::shared::config::DatabaseConfig;
use crate::shared::{AppConfig, StoreKind};

/// Build Postgres connect options from either the URL or the parts
pub fn connect_options(database: &DatabaseConfig) -> Result<PgConnectOptions, StoreError> {
    if let Some(url) = &database.url {
        return Ok(url.parse::<PgConnectOptions>()?);
    }

    let mut options = PgConnectOptions::new()
        .host(&database.host)
        .port(database.port)
        .database(&database.name);
    if let Some(username) = &database.username {
        options = options.username(username);
    }
    if let Some(password) = &database.password {
        options = options.password(password);
    }
    Ok(options)
}

/// Open the configured user store
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory user store; users are lost on restart");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StoreKind::Postgres => {
            tracing::info!("Connecting to database...");
            let store = PgUserStore::connect(connect_options(&config.database)?).await?;
            tracing::info!("Database connection pool created successfully");

            tracing::info!("Running database migrations...");
            store.migrate().await?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(store))
        }
    }
}
