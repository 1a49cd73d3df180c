/**
 * Credential Issuer
 *
 * Turns a validated registration into a stored user and, when asked, a
 * signed token for that user.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (see `Registration`)
 * 2. Hash the password with bcrypt; the plaintext goes no further
 * 3. Insert the user; a duplicate email is a 400, not a 500
 * 4. Sign a token whose subject is the new user's id
 */

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::{NewUser, User};
use crate::shared::validation::{required_email, required_password, required_text};
use crate::shared::SharedError;

/// Validated user-creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl Registration {
    /// Validate input where a password is mandatory
    pub fn with_password(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, SharedError> {
        Ok(Self {
            name: required_text("name", name)?,
            email: required_email(email)?,
            password: Some(required_password(password)?),
        })
    }

    /// Validate input where a password may be omitted
    ///
    /// A password that is present but blank is still rejected.
    pub fn optional_password(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, SharedError> {
        let name = required_text("name", name)?;
        let email = required_email(email)?;
        let password = match password {
            Some(raw) => Some(required_password(Some(raw)).map_err(|e| match e {
                SharedError::MissingField { .. } => {
                    SharedError::validation("password", "must not be blank")
                }
                other => other,
            })?),
            None => None,
        };
        Ok(Self { name, email, password })
    }
}

/// Store a new user, hashing the password if one was given
pub async fn create_user(state: &AppState, registration: Registration) -> Result<User, BackendError> {
    let password_hash = match registration.password {
        Some(password) => Some(state.passwords.hash(password).await.map_err(|e| {
            BackendError::internal(format!("failed to hash password: {e}"))
        })?),
        None => None,
    };

    let user = state
        .store
        .insert(NewUser {
            name: registration.name,
            email: registration.email,
            password_hash,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user: {}", e);
            BackendError::from(e)
        })?;

    tracing::info!("User created: {} ({})", user.id, user.email);
    Ok(user)
}

/// Sign a token for an existing user
pub fn issue_token(state: &AppState, user: &User) -> Result<String, BackendError> {
    state
        .sessions
        .create_token(user.id)
        .map_err(|e| BackendError::internal(format!("failed to create token: {e}")))
}

/// Store a new user and sign a token for them
pub async fn register(
    state: &AppState,
    registration: Registration,
) -> Result<(User, String), BackendError> {
    let user = create_user(state, registration).await?;
    let token = issue_token(state, &user)?;
    Ok((user, token))
}
