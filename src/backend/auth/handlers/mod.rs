//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - create a user and sign a token
//! - **`login`** - POST /api/auth/login - exchange email and password for a token
//! - **`get_me`** - GET /api/auth/me - the user behind the bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use userbase::backend::auth::handlers::{get_me, login, register};
//! use userbase::backend::server::state::AppState;
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(get_me))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use me::get_me;
pub use register::register;
