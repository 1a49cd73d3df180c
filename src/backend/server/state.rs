/**
 * Application State
 *
 * `AppState` is built once at startup and handed to the router. It is the
 * only thing handlers share: the store handle, the token keys and the
 * password hasher. Nothing in it is mutable; per-request identity travels
 * in request extensions, never here.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(store): State<Arc<dyn UserStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::users::UserStore;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    /// User store, shared by every request
    pub store: Arc<dyn UserStore>,

    /// Token signing and verification keys
    pub sessions: SessionKeys,

    /// bcrypt settings
    pub passwords: PasswordHasher,

    /// Whether `GET /api/users` requires a bearer token, and whether
    /// `POST /api/users` issues one
    pub require_auth: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            sessions: SessionKeys::from_config(config),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            require_auth: config.require_auth,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.store)
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}

/// State over a fresh in-memory store with the cheapest bcrypt cost
#[cfg(test)]
pub(crate) fn test_state(require_auth: bool) -> AppState {
    use crate::backend::users::MemoryUserStore;

    let config = AppConfig::builder()
        .jwt_secret("unit-test-secret")
        .bcrypt_cost(4)
        .require_auth(require_auth)
        .build()
        .expect("valid test config");
    AppState::new(&config, Arc::new(MemoryUserStore::new()))
}
