/**
 * Register Handler
 *
 * `POST /api/auth/register`. Every field is required; on success the new
 * user is returned with a token so the client can call guarded routes
 * straight away.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::issuer::{self, Registration};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or blank field, malformed email, duplicate email
/// * `500 Internal Server Error` - hashing, store or signing failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    let registration = Registration::with_password(
        request.name.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    )?;

    let (user, token) = issuer::register(&state, registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::state::test_state;

    fn request(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_register_returns_user_and_token() {
        let state = test_state(true);

        let (status, Json(response)) = register(
            State(state.clone()),
            Ok(Json(request(Some("A"), Some("a@x.com"), Some("p")))),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.user.name, "A");
        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(
            state.sessions.user_id_from_token(&response.token).unwrap(),
            response.user.id
        );
    }

    #[tokio::test]
    async fn test_missing_fields_create_nothing() {
        let state = test_state(true);
        let cases = [
            request(None, Some("a@x.com"), Some("p")),
            request(Some("A"), None, Some("p")),
            request(Some("A"), Some("a@x.com"), None),
            request(Some(""), Some("a@x.com"), Some("p")),
            request(Some("A"), Some("a@x.com"), Some("")),
        ];

        for case in cases {
            let err = register(State(state.clone()), Ok(Json(case))).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(state.store.count().await.unwrap(), 0);
    }
}
