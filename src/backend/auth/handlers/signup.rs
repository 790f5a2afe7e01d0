/**
 * Signup Handler
 *
 * Registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Hash password using bcrypt
 * 3. Create the user document (no groups yet)
 * 4. Generate a session token
 *
 * # Validation
 *
 * - Email must contain '@' character (basic validation)
 * - Password must be at least 8 characters long
 * - Email must be unique, enforced by the store
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::backend::store::{NewUser, StoreError};
use crate::shared::api::{AuthResponse, SignupRequest, UserResponse};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If email format is invalid or password is too short
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If hashing, storing or token generation fails
pub async fn signup(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    if !request.email.contains('@') {
        return Err(BackendError::invalid_input("Invalid email format"));
    }

    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(BackendError::invalid_input(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let password_hash = hash(&request.password, app_state.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    let user = app_state
        .store
        .insert_user(NewUser {
            email: request.email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => BackendError::conflict("Email already registered"),
            other => BackendError::store("Failed to create user", other),
        })?;

    let token = app_state
        .sessions
        .create_token(&user.id, &user.email)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse {
                id: user.id.to_string(),
                email: user.email,
            },
        }),
    ))
}
