//! Shared Module
//!
//! Types that do not depend on the HTTP server: configuration loading and
//! request field validation. Everything here is plain data and can be used
//! from the binaries, the backend and the tests alike.

/// Shared error types
pub mod error;

/// Request field validation helpers
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DatabaseConfig, StoreKind};
