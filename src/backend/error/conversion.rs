/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and the access guard
 * can return it directly. The body is always JSON:
 *
 * ```json
 * { "error": "VALIDATION_ERROR", "message": "email is required", "status": 400 }
 * ```
 *
 * Internal errors are logged here with their full detail; the client only
 * sees the generic message.
 */

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::backend::error::types::BackendError;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    status: u16,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = ErrorBody {
            error: self.kind(),
            message: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
