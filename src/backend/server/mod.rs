//! Server Module
//!
//! Application state, store selection and app construction.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Opening the configured user store
//! - **`init`** - `create_app` / `build_app`
//!
//! # Example
//!
//! ```rust,no_run
//! use userbase::backend::server::create_app;
//! use userbase::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app.router).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_app, create_app, App};
pub use state::AppState;
