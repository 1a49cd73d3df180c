/**
 * Backend Error Types
 *
 * Every failure a handler or the access guard can produce ends up as one of
 * these variants, which in turn decides the HTTP status:
 *
 * - `Validation` - missing field, malformed email or body, duplicate email (400)
 * - `Authentication` - missing, malformed, forged or expired token (401)
 * - `NotFound` - an authenticated user that no longer exists, unknown route (404)
 * - `MethodNotAllowed` - known path, wrong method (405)
 * - `Internal` - store or hashing failures (500, detail kept server-side)
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::users::StoreError;
use crate::shared::SharedError;

/// Message returned to clients for any internal error
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use userbase::backend::error::BackendError;
///
/// let err = BackendError::validation("name is required");
/// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request data failed validation
    #[error("{message}")]
    Validation {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Caller could not be authenticated
    #[error("{message}")]
    Authentication {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Requested resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Path exists but not for this method
    #[error("{message}")]
    MethodNotAllowed {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Unexpected failure. The detail is logged, never returned.
    #[error("Internal error: {detail}")]
    Internal {
        /// Diagnostic detail for the server log
        detail: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new method-not-allowed error
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Authentication { .. } => "AUTHENTICATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Authentication { message }
            | Self::NotFound { message }
            | Self::MethodNotAllowed { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        tracing::warn!("Rejected request field: {}", err);
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection);
        Self::validation(rejection.body_text())
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::validation("Email already exists"),
            other => Self::internal(other.to_string()),
        }
    }
}
