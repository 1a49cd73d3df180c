/**
 * User Model
 *
 * The persisted user record and the data needed to create one. `User` is
 * never serialized directly; responses go through `UserResponse`, which has
 * no password field.
 */

use chrono::{DateTime, Utc};

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4, assigned on insert)
    pub id: uuid::Uuid,
    /// Display name, trimmed and non-empty
    pub name: String,
    /// Email address, trimmed and lower-cased; unique across users
    pub email: String,
    /// bcrypt hash, absent for users created without a password
    pub password_hash: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated data for a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}
