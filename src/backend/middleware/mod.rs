//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware runs before requests
//! reach handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token gate in front of the `/api` routes and `/auth/me`
//! - **`json`** - `ApiJson` body extractor that rejects with `BackendError`
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, Router};
//! use groupnotes::backend::middleware::auth_middleware;
//! use groupnotes::backend::server::state::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;
pub mod json;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
