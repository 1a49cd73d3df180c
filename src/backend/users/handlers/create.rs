/**
 * Create User Handler
 *
 * `POST /api/users`. What it requires depends on whether the access guard is
 * enabled:
 *
 * - guarded: `{name, email, password}` all required; the response carries a
 *   token, exactly like `/api/auth/register`
 * - plain: `{name, email}` required, `password` optional (hashed if given);
 *   no token is issued
 *
 * The route itself is never guarded; it is how the first user gets in.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::issuer::{self, Registration};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::types::{CreateUserRequest, CreatedUserResponse};

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), BackendError> {
    let Json(request) = payload?;
    let name = request.name.as_deref();
    let email = request.email.as_deref();
    let password = request.password.as_deref();

    let response = if state.require_auth {
        let registration = Registration::with_password(name, email, password)?;
        let (user, token) = issuer::register(&state, registration).await?;
        CreatedUserResponse {
            user: user.into(),
            token: Some(token),
        }
    } else {
        let registration = Registration::optional_password(name, email, password)?;
        let user = issuer::create_user(&state, registration).await?;
        CreatedUserResponse {
            user: user.into(),
            token: None,
        }
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::state::test_state;

    fn body(name: &str, email: &str, password: Option<&str>) -> Result<Json<CreateUserRequest>, JsonRejection> {
        Ok(Json(CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: password.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_plain_create_issues_no_token() {
        let state = test_state(false);

        let (status, Json(created)) = create_user(State(state.clone()), body("A", "a@x.com", None))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(created.token.is_none());
        let stored = state.store.find_by_id(created.user.id).await.unwrap().unwrap();
        assert!(stored.password_hash.is_none());
    }

    #[tokio::test]
    async fn test_plain_create_hashes_optional_password() {
        let state = test_state(false);

        let (_, Json(created)) = create_user(State(state.clone()), body("A", "a@x.com", Some("p")))
            .await
            .unwrap();

        let stored = state.store.find_by_id(created.user.id).await.unwrap().unwrap();
        assert!(stored.password_hash.is_some_and(|hash| hash != "p"));
    }

    #[tokio::test]
    async fn test_guarded_create_requires_password_and_issues_token() {
        let state = test_state(true);

        let err = create_user(State(state.clone()), body("A", "a@x.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Validation { .. }));
        assert_eq!(state.store.count().await.unwrap(), 0);

        let (_, Json(created)) = create_user(State(state.clone()), body("A", "a@x.com", Some("p")))
            .await
            .unwrap();
        let token = created.token.expect("token issued");
        assert_eq!(state.sessions.user_id_from_token(&token).unwrap(), created.user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_bad_request() {
        let state = test_state(false);
        create_user(State(state.clone()), body("A", "a@x.com", None)).await.unwrap();

        let err = create_user(State(state.clone()), body("B", "a@x.com", None))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.count().await.unwrap(), 1);
    }
}
