//! Backend Module
//!
//! The Axum HTTP server: a small user-management API with bearer-token
//! authentication.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app construction
//! - **`routes`** - Router assembly
//! - **`users`** - User model, store port and implementations, `/api/users`
//! - **`auth`** - Passwords, tokens, registration and the `/api/auth/*` handlers
//! - **`middleware`** - The bearer-token guard
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Request Flow
//!
//! client → access guard (guarded routes only) → handler → `UserStore` → response
//!
//! Handlers return `Result<_, BackendError>`; every failure is rendered as a
//! JSON body `{"error", "message", "status"}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Users and the user store
pub mod users;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{build_app, create_app, App, AppState};
