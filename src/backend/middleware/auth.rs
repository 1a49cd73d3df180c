/**
 * Authentication Middleware
 *
 * Guards routes that require a bearer token. The token is read from the
 * `Authorization` header, verified against the session keys, and the user
 * id from its subject is attached to the request extensions for handlers.
 *
 * The guard is stateless: it checks the signature and expiry only and never
 * looks the user up in the store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;

pub const MISSING_TOKEN_MESSAGE: &str = "Authentication required";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Identity established by a verified bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively. Anything else (no header, a
/// different scheme, an empty token) yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// Returns 401 when the token is missing or fails verification; otherwise
/// inserts an `AuthenticatedUser` and runs the inner handler.
pub async fn auth_middleware(
    State(sessions): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::authentication(MISSING_TOKEN_MESSAGE)
    })?;

    let user_id = sessions.user_id_from_token(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        BackendError::authentication(INVALID_TOKEN_MESSAGE)
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; without it the request is rejected
/// with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::authentication(MISSING_TOKEN_MESSAGE)
            })
    }
}
