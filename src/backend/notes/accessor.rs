/**
 * Group/Notes Accessor
 *
 * Read-only projections over a user's groups. Both reads are a single store
 * query and have no side effects.
 */
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::notes::{
    validate_user_id, INVALID_NOTES_USER_ID, INVALID_USER_ID, USER_NOT_FOUND,
};
use crate::backend::store::UserStore;
use crate::shared::{GroupSummary, Note};

/// Read side of the groups API
#[derive(Clone)]
pub struct GroupAccessor {
    store: Arc<dyn UserStore>,
}

impl GroupAccessor {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Summaries of every group of a user, in stored order
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - `user_id` is not a well-formed id
    /// * `NotFound` - no such user
    /// * `StoreFailure` - the store query failed
    pub async fn list_groups(&self, user_id: &str) -> Result<Vec<GroupSummary>, BackendError> {
        let id = validate_user_id(user_id, INVALID_USER_ID)?;

        match self.store.group_summaries(&id).await {
            Ok(Some(groups)) => {
                tracing::debug!("Listed {} groups for user {}", groups.len(), id);
                Ok(groups)
            }
            Ok(None) => Err(BackendError::not_found(USER_NOT_FOUND)),
            Err(e) => Err(BackendError::store("Error getting groups", e)),
        }
    }

    /// Notes of every group of a user, in stored group order
    ///
    /// The i-th element belongs to the i-th group returned by `list_groups`
    /// for the same user, provided nothing changed in between.
    ///
    /// # Errors
    ///
    /// Same as `list_groups`.
    pub async fn list_notes(&self, user_id: &str) -> Result<Vec<Vec<Note>>, BackendError> {
        let id = validate_user_id(user_id, INVALID_NOTES_USER_ID)?;

        match self.store.group_notes(&id).await {
            Ok(Some(notes)) => Ok(notes),
            Ok(None) => Err(BackendError::not_found(USER_NOT_FOUND)),
            Err(e) => Err(BackendError::store("Error getting notes", e)),
        }
    }
}
