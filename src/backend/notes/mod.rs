//! Groups and Notes
//!
//! The core of the service: reading and changing the groups embedded in a
//! user document.
//!
//! # Architecture
//!
//! - **`accessor`** - `GroupAccessor`, read-side projections (group
//!   summaries, notes per group)
//! - **`mutator`** - `GroupMutator`, write-side operations (create a group,
//!   append a note, delete a group)
//! - **`handlers`** - Axum handlers mapping HTTP requests onto the two
//!
//! Both the accessor and the mutator receive the store handle when they are
//! constructed. They validate user ids before building any store query, and
//! convert every failure into a `BackendError` at their boundary.
//!
//! # Positional Correlation
//!
//! `list_notes` returns one notes array per group, in the same order as
//! `list_groups`, without the group ids. Clients pair the two results by
//! index; nothing makes the two calls atomic with respect to each other.

use crate::backend::error::BackendError;
use crate::shared::UserId;

/// Read-side projections
pub mod accessor;

/// Write-side operations
pub mod mutator;

/// HTTP handlers
pub mod handlers;

pub use accessor::GroupAccessor;
pub use mutator::GroupMutator;

pub(crate) const INVALID_USER_ID: &str = "invalid user ID format";
/// `GET /api/{user_id}/notes` has always answered with a capitalised message
pub(crate) const INVALID_NOTES_USER_ID: &str = "Invalid user ID format";
pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Validate a raw user id before it reaches the store
///
/// `message` is what the client sees when the id is malformed.
pub(crate) fn validate_user_id(raw: &str, message: &str) -> Result<UserId, BackendError> {
    UserId::parse(raw).map_err(|e| {
        tracing::warn!("Rejected {}", e);
        BackendError::invalid_input(message)
    })
}
