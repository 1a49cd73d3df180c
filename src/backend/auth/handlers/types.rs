/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login and get_me
 * handlers. As with `CreateUserRequest`, request fields are optional so that
 * a missing field is reported by validation with its name.
 */

use serde::{Deserialize, Serialize};

use crate::backend::users::handlers::types::UserResponse;

/// Register request
#[derive(Deserialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Auth response
///
/// Returned by register and login: the user's public fields with the bearer
/// token alongside them.
#[derive(Serialize, Debug, Clone)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    /// JWT token for the `Authorization: Bearer` header
    pub token: String,
}
