//! Userbase - Main Library
//!
//! Userbase is a small user-management REST service: it creates and lists
//! users, registers users with a password, and gates the user listing behind
//! a signed bearer token.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependency
//!   - Application configuration (`AppConfig`) loaded from the environment
//!   - Field validation errors and helpers
//!
//! - **`backend`** - The Axum HTTP server
//!   - User store (Postgres via sqlx, or in memory)
//!   - Credential issuing (bcrypt + JWT) and the access guard middleware
//!   - Route assembly and error-to-response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use userbase::backend::server::init::create_app;
//! use userbase::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app.router` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for request field validation
//! - `backend::users::StoreError` for persistence failures
//! - `backend::BackendError` for everything that becomes an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
