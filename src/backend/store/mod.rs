//! User Document Store
//!
//! This module defines the `UserStore` trait, the single capability through
//! which the accessor, the mutator and the auth handlers reach persistent
//! data. A store handle is created once at startup and injected everywhere
//! it is needed; nothing looks it up from global state.
//!
//! # Implementations
//!
//! - **`memory`** - `MemoryUserStore`, an in-process map used when no
//!   database is configured and throughout the tests
//! - **`postgres`** - `PgUserStore`, one row per user with the groups array
//!   held in a JSONB column
//!
//! # Atomicity
//!
//! Every trait method is a single store operation and is atomic for the one
//! user document it touches. There are no multi-document transactions.
//! Callers that read and then write (group creation) get no isolation
//! between the two calls.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Group, GroupSummary, Note, User, UserId};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document could not be encoded for storage
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A uniqueness constraint was violated
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stored document does not decode into the document model
    #[error("corrupt document {id}: {message}")]
    Corrupt { id: String, message: String },
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Login lookup result
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}

/// Persistent collection of user documents
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user with a fresh id and no groups
    ///
    /// Fails with `StoreError::Conflict` when the email is already taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look up login credentials by email
    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError>;

    /// Fetch a whole user document
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Project every group of a user to its summary, in stored order
    async fn group_summaries(&self, id: &UserId) -> Result<Option<Vec<GroupSummary>>, StoreError>;

    /// Project every group of a user to its notes, in stored order
    async fn group_notes(&self, id: &UserId) -> Result<Option<Vec<Vec<Note>>>, StoreError>;

    /// Append a group to a user's groups and return the updated user
    async fn push_group(&self, id: &UserId, group: Group) -> Result<Option<User>, StoreError>;

    /// Append `note` as one element to the notes of every group with
    /// `group_id`
    ///
    /// Returns the user's groups after the update, or `None` when the user
    /// does not exist or owns no such group.
    async fn push_note(
        &self,
        id: &UserId,
        group_id: i64,
        note: Note,
    ) -> Result<Option<Vec<Group>>, StoreError>;

    /// Remove every group with `group_id` (and its notes)
    ///
    /// Returns the number of modified user documents: 0 or 1.
    async fn pull_group(&self, id: &UserId, group_id: i64) -> Result<u64, StoreError>;
}
