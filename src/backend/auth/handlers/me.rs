/**
 * Get Current User Handler
 *
 * Handler for GET /auth/me. Runs behind the auth middleware and returns the
 * account behind the presented token, without credentials or groups.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::api::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid token (rejected by the middleware)
/// * `404 Not Found` - The token's user no longer exists
/// * `500 Internal Server Error` - The store lookup failed
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = app_state
        .store
        .find_user(&caller.user_id)
        .await
        .map_err(|e| BackendError::store("Error getting user", e))?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
    }))
}
