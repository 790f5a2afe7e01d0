/**
 * Authentication Routes
 *
 * - `POST /auth/signup` - User registration (public)
 * - `POST /auth/login` - User login (public)
 * - `GET /auth/me` - Current user (requires a bearer token)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
pub fn configure_auth_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .merge(protected)
}
