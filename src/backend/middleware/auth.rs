/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in caller. The bearer token from the
 * Authorization header is verified and the caller's identity is attached to
 * the request extensions for handlers.
 *
 * The gate only checks that the token is valid. It does not compare the
 * token subject with the `userId` in the path, and it does not look the
 * user up in the store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;
use crate::shared::UserId;

const MISSING_TOKEN: &str = "Authentication required";
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Authentication middleware
///
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 Unauthorized if the token is missing, malformed or expired.
pub async fn auth_middleware(
    State(sessions): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized(MISSING_TOKEN)
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized(MISSING_TOKEN)
    })?;

    let claims = sessions.verify_token(token.trim()).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    // Tokens are only minted for stored users, so a bad subject means a forged or stale key.
    let user_id = UserId::parse(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only succeeds on routes wrapped by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(MISSING_TOKEN)
            })?;

        Ok(AuthUser(user))
    }
}
