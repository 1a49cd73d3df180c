//! Authentication Module
//!
//! Credential issuance and the authentication endpoints. The bearer token
//! guard itself lives in `backend::middleware`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT signing and verification
//! ├── issuer.rs       - Registration: validate, hash, store, sign
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - POST /api/auth/register
//!     ├── login.rs    - POST /api/auth/login
//!     └── me.rs       - GET /api/auth/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user stored with a bcrypt hash → token returned
//! 2. **Login**: email and password → hash verified → token returned
//! 3. **Guarded request**: `Authorization: Bearer <token>` → signature and expiry checked → handler runs
//!
//! Tokens are HS256 JWTs whose subject is the user id. They are not stored
//! and cannot be revoked before they expire.

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// User registration and token issuance
pub mod issuer;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, AuthResponse, LoginRequest, RegisterRequest};
pub use passwords::PasswordHasher;
pub use sessions::{Claims, SessionKeys};
