//! Request field validation
//!
//! Every user-facing body field goes through one of these helpers before it
//! reaches the store. Names are trimmed, emails are trimmed and lower-cased,
//! and passwords are kept byte-for-byte but may not be blank.

use crate::shared::error::SharedError;

/// bcrypt reads 72 bytes including a terminating NUL, leaving 71 for the password
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Require a text field to be present and non-blank, returning it trimmed.
pub fn required_text(field: &str, value: Option<&str>) -> Result<String, SharedError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(SharedError::missing(field)),
    }
}

/// Require an email address and normalize it for storage and lookup.
///
/// The check is deliberately loose: one `@` with something on both sides.
pub fn required_email(value: Option<&str>) -> Result<String, SharedError> {
    let email = required_text("email", value)?.to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}

/// Require a password. Surrounding whitespace is significant and kept.
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] are rejected rather than
/// silently truncated by bcrypt.
pub fn required_password(value: Option<&str>) -> Result<String, SharedError> {
    match value {
        Some(password) if password.len() > MAX_PASSWORD_BYTES => Err(SharedError::validation(
            "password",
            format!("must be at most {MAX_PASSWORD_BYTES} bytes"),
        )),
        Some(password) if !password.trim().is_empty() => Ok(password.to_string()),
        _ => Err(SharedError::missing("password")),
    }
}
