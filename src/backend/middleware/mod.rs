//! Middleware Module
//!
//! HTTP middleware that runs before handlers. Currently only the bearer
//! token guard lives here.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use userbase::backend::auth::sessions::SessionKeys;
//! use userbase::backend::middleware::auth_middleware;
//!
//! # fn guard(sessions: SessionKeys) -> Router {
//! Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(from_fn_with_state(sessions, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
