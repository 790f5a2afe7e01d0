//! Shared Module
//!
//! Types and data structures shared between the server and its clients.
//! Everything here is plain data: no I/O, no async, serializable with serde.

/// User and group identifiers
pub mod ids;

/// User / group / note document model
pub mod notes;

/// Request and response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use ids::{parse_group_id, UserId};
pub use notes::{notes_by_group_offset, Group, GroupSummary, GroupedNotes, Note, User};
