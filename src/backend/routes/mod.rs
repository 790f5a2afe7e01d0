//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server. Routes are grouped by
//! functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, health, static files, layers
//! ├── auth_routes.rs  - Signup, login, current user
//! └── api_routes.rs   - Group and note endpoints
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `GET /health` - Liveness probe
//! - `POST /auth/signup` - User registration
//! - `POST /auth/login` - User login
//! - `GET /static/*` - Static assets
//!
//! ## Protected (bearer token)
//!
//! - `GET /auth/me` - Current user
//! - `GET /api/{user_id}` - Group summaries
//! - `GET /api/{user_id}/notes` - Notes per group
//! - `POST /api` - Create group
//! - `PATCH|POST /api/{user_id}/{group_id}` - Append note
//! - `DELETE /api/{user_id}/{group_id}` - Delete group

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Group and note routes
pub mod api_routes;

pub use router::create_router;
