//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool instead of stalling the async workers. Each hash gets
//! its own random salt, embedded in the returned string.
//!
//! The non-truncating variants are used throughout: a password longer than
//! bcrypt's 72-byte input (NUL included) is an error, never a silent prefix match.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

/// Hashed once per hasher and checked against when there is no real hash
const DUMMY_PASSWORD: &str = "userbase-dummy-password";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let cost = self.cost;
        let hashed =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check a password against a stored hash
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        let valid =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash)).await??;
        Ok(valid)
    }

    /// Spend the same bcrypt work as `verify` when there is no hash to check
    ///
    /// Used on login paths that are going to fail anyway (unknown email, user
    /// without a password) so they take as long as a wrong password does.
    pub async fn verify_against_dummy(&self, password: String) -> Result<(), PasswordError> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD.to_string()))
            .await?
            .clone();
        // a password over the byte limit is an error here, same as in `verify`
        self.verify(password, hash).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn has_dummy_hash(&self) -> bool {
        self.dummy_hash.initialized()
    }
}
