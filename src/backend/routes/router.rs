/**
 * Router Configuration
 *
 * Combines the API routes, the index route and the 404/405 fallbacks into
 * one router, with request tracing around everything. Both fallbacks answer
 * with the same JSON error body as the handlers.
 */

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub const GREETING: &str = "userbase is running";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(index));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn index() -> &'static str {
    GREETING
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

async fn method_not_allowed() -> BackendError {
    BackendError::method_not_allowed("Method not allowed")
}
