//! Route Configuration Module
//!
//! - **`router`** - Main router creation, index route, fallback and tracing
//! - **`api_routes`** - `/api/users` and `/api/auth/*`
//!
//! Route-level guards are attached in `api_routes`; the tracing layer wraps
//! the whole router, fallback included.

pub mod api_routes;
pub mod router;

pub use router::create_router;
