/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Group not found",
 *   "status": 404
 * }
 * ```
 *
 * Store failures additionally carry `"error"` with the underlying detail.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("{} ({}): {}", message, status.as_u16(), self);
        } else {
            tracing::warn!("{} ({})", message, status.as_u16());
        }

        let mut body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });
        if let Some(detail) = self.detail() {
            body["error"] = serde_json::Value::String(detail);
        }

        (status, Json(body)).into_response()
    }
}

/// Plain 404 for unknown routes, in the same body shape as `BackendError`
pub async fn route_not_found() -> Response {
    BackendError::handler(StatusCode::NOT_FOUND, "Route not found").into_response()
}
