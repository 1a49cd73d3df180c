//! User store port.
//!
//! Handlers and the credential issuer only ever talk to `dyn UserStore`.
//! Email uniqueness and insert atomicity are the store's job: an insert that
//! collides on email fails with [`StoreError::DuplicateEmail`] and leaves
//! nothing behind.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::users::model::{NewUser, User};

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another user already has this email
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// The database rejected or failed the operation
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// The store cannot serve requests (closed, migrations failed, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::DuplicateEmail,
            _ => Self::Database(err),
        }
    }
}

/// Storage for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user, assigning its identifier and creation time
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// All users in store order
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Look up by an already-normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Release the underlying connections. Later calls fail.
    async fn close(&self);
}
