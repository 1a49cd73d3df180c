use axum::{extract::State, response::Json, Extension};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::types::UserResponse;

/// List all users
///
/// Handles `GET /api/users`. Behind the access guard the caller's identity is
/// in the request extensions; without the guard it is absent. Users come back
/// in store order with password hashes projected out.
pub async fn list_users(
    State(state): State<AppState>,
    caller: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = state.store.list().await.map_err(|e| {
        tracing::error!("Failed to list users: {}", e);
        BackendError::from(e)
    })?;

    match caller {
        Some(Extension(caller)) => {
            tracing::debug!("User {} listed {} users", caller.user_id, users.len())
        }
        None => tracing::debug!("Listed {} users", users.len()),
    }

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::issuer::{create_user, Registration};
    use crate::backend::server::state::test_state;

    #[tokio::test]
    async fn test_lists_in_insert_order() {
        let state = test_state(false);
        for (name, email) in [("A", "a@x.com"), ("B", "b@x.com")] {
            let registration = Registration::optional_password(Some(name), Some(email), None).unwrap();
            create_user(&state, registration).await.unwrap();
        }

        let Json(users) = list_users(State(state), None).await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_closed_store_is_internal_error() {
        let state = test_state(false);
        state.store.close().await;

        let err = list_users(State(state), None).await.unwrap_err();
        assert!(matches!(err, BackendError::Internal { .. }));
    }
}
