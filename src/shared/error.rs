//! Shared Error Types
//!
//! Errors produced while checking request fields. They carry the offending
//! field name so the backend can turn them into a readable 400 response.
//!
//! # Usage
//!
//! ```rust
//! use userbase::shared::error::SharedError;
//!
//! let error = SharedError::missing("email");
//! assert_eq!(error.field(), "email");
//! ```
use thiserror::Error;

/// Field validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was absent or blank
    #[error("{field} is required")]
    MissingField {
        /// The field that was missing
        field: String,
    },

    /// A field was present but malformed
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field this error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::ValidationError { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let error = SharedError::missing("name");
        assert_eq!(error.field(), "name");
        assert_eq!(error.to_string(), "name is required");
    }

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match &error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected ValidationError"),
        }
        assert!(error.to_string().contains("Invalid email format"));
    }
}
