use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::types::UserResponse;

/// Get current user handler
///
/// `GET /api/auth/me`, mounted behind the access guard. The token only proves
/// who the caller was when it was signed, so a user removed since then gets
/// 404.
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = state
        .store
        .find_by_id(caller.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load user {}: {}", caller.user_id, e);
            BackendError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Token for missing user: {}", caller.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.into()))
}
