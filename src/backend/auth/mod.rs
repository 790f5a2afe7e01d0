//! Authentication Module
//!
//! Account registration, login and session tokens. The tokens issued here
//! are what the auth middleware checks in front of every `/api` route.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers (signup, login, me)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user document created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Requests**: `Authorization: Bearer <token>` on every `/api` call
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs; lifetime comes from configuration
//! - Invalid credentials return 401 (no information leakage)

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, signup};
pub use sessions::{Claims, SessionKeys};
