/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Users
 * - `GET /api/users` - List users (bearer token when the guard is enabled)
 * - `POST /api/users` - Create a user (never guarded)
 *
 * ## Authentication
 * - `POST /api/auth/register` - Create a user and return a token
 * - `POST /api/auth/login` - Exchange credentials for a token
 * - `GET /api/auth/me` - The user behind the token (always guarded)
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{create_user, list_users};

/// Configure API routes
///
/// The guard is attached with `route_layer` on the GET method router only,
/// so `POST /api/users` on the same path stays open.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let guard = || from_fn_with_state(app_state.sessions.clone(), auth_middleware);

    let users = if app_state.require_auth {
        get(list_users).route_layer(guard())
    } else {
        get(list_users)
    };

    router
        .route("/api/users", users.post(create_user))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me).route_layer(guard()))
}
