/**
 * Session Tokens
 *
 * HS256 JWTs whose subject is the user's UUID. Tokens carry `iat` and `exp`
 * and are verified statelessly: signature, algorithm and expiry. There is no
 * revocation list; a token is good until `exp`.
 *
 * The keys are built once from `AppConfig` and carried in the router state,
 * so nothing here reads the environment at request time.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to sign token: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
    #[error("token subject is not a user id")]
    InvalidSubject,
}

/// Signing and verification keys plus the token lifetime
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.token_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, user_id: Uuid) -> Result<String, SessionError> {
        self.create_token_at(user_id, get_current_timestamp())
    }

    fn create_token_at(&self, user_id: Uuid, issued_at: u64) -> Result<String, SessionError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: issued_at.saturating_add(self.ttl.as_secs()),
            iat: issued_at,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(SessionError::Encode)
    }

    /// Verify and decode a JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, SessionError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(SessionError::Invalid)
    }

    /// Verify a token and return the user it was issued to
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid, SessionError> {
        let claims = self.verify_token(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| SessionError::InvalidSubject)
    }
}
