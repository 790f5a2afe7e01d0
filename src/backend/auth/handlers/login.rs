/**
 * Login Handler
 *
 * Authentication handler for POST /auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password produce the same 401 response
 * - Password hashes are never returned in responses
 */
use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;

use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::api::{AuthResponse, LoginRequest, UserResponse};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store lookup or token generation fails
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let credentials = app_state
        .store
        .find_credentials(&request.email)
        .await
        .map_err(|e| BackendError::store("Error logging in", e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    let valid = verify(&request.password, &credentials.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = app_state
        .sessions
        .create_token(&credentials.id, &credentials.email)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?;

    tracing::info!("User logged in successfully: {}", credentials.id);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: credentials.id.to_string(),
            email: credentials.email,
        },
    }))
}
