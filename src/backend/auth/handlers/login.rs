/**
 * Login Handler
 *
 * `POST /api/auth/login`.
 *
 * # Authentication Process
 *
 * 1. Look up the user by normalized email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Sign a token and return it with the user
 *
 * An unknown email, a wrong password and a user created without a password
 * all get the same 401, so the response does not reveal which emails exist.
 * The first two also cost the same bcrypt verification: without a stored
 * hash the password is checked against a dummy one.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::issuer;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::validation::{required_email, required_password};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    let email = required_email(request.email.as_deref())?;
    let password = required_password(request.password.as_deref())?;

    let user = state.store.find_by_email(&email).await.map_err(|e| {
        tracing::error!("Failed to look up user: {}", e);
        BackendError::from(e)
    })?;

    let stored_hash = user.as_ref().and_then(|u| u.password_hash.clone());
    let valid = match stored_hash {
        Some(hash) => state.passwords.verify(password, hash).await,
        None => state.passwords.verify_against_dummy(password).await.map(|()| false),
    }
    .map_err(|e| {
        tracing::error!("Password verification error: {}", e);
        BackendError::internal(format!("password verification failed: {e}"))
    })?;

    let user = match user {
        Some(user) if valid => user,
        Some(user) => {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(BackendError::authentication(INVALID_CREDENTIALS_MESSAGE));
        }
        None => {
            tracing::warn!("Login for unknown email: {}", email);
            return Err(BackendError::authentication(INVALID_CREDENTIALS_MESSAGE));
        }
    };

    let token = issuer::issue_token(&state, &user)?;
    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}
