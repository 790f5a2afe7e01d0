/**
 * JSON Body Extractor
 *
 * Wraps `axum::Json` so a body that fails to parse is answered with the
 * same `{message, status}` document as every other client error, instead
 * of axum's plain-text rejection.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// Request body extractor with `BackendError` rejections
///
/// Any rejection (bad syntax, wrong types, missing content type) becomes
/// 400 carrying axum's description of what went wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body ({}): {}", rejection.status(), rejection.body_text());
        BackendError::invalid_input(rejection.body_text())
    }
}
