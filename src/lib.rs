//! GroupNotes - Main Library
//!
//! GroupNotes is a small note-taking backend: every user owns an ordered list
//! of groups, and every group holds an ordered list of notes. The service is
//! exposed over HTTP with Axum and guarded by bearer-token authentication.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the server and its clients
//!   - User identifiers and group id parsing
//!   - The user / group / note document model
//!   - Request and response bodies
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Group/notes accessor and mutator
//!   - Document store abstraction with in-memory and PostgreSQL backends
//!   - Account registration and JWT issuance
//!
//! # Usage
//!
//! ```rust,no_run
//! use groupnotes::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is cheap to clone and shared through `Arc`. The store is
//! the only shared resource; every store operation is atomic for the single
//! user document it touches.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
