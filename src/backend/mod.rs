//! Backend Module
//!
//! Server-side code for the groupnotes service: an Axum HTTP server that
//! stores per-user note groups and hands out session tokens.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`notes`** - Group and note operations (accessor, mutator, handlers)
//! - **`store`** - `UserStore` trait with in-memory and PostgreSQL backends
//! - **`auth`** - Signup, login and JWT session tokens
//! - **`middleware`** - Bearer token gate
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── notes/          - Group operations
//! ├── store/          - Persistence
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! CORS → TraceLayer → router → auth middleware → handler
//!      → GroupAccessor / GroupMutator → UserStore
//! ```
//!
//! Each store operation is atomic on one user document. Handlers never hold
//! locks across awaits; the memory store takes its lock once per call.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. Errors render as
//! `{"message", "status"}` JSON with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Group and note operations
pub mod notes;

/// User document persistence
pub mod store;

/// Backend error types
pub mod error;

/// Authentication and sessions
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use notes::{GroupAccessor, GroupMutator};
pub use server::{create_app, create_app_with_store, AppState, ServerConfig};
pub use store::{MemoryUserStore, PgUserStore, StoreError, UserStore};
