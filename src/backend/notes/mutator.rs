/**
 * Group/Notes Mutator
 *
 * Write-side operations on a user's groups.
 *
 * # Group Ids
 *
 * A new group gets `groupId = number of existing groups + 1`. The count is
 * read first and the group pushed in a second store call, so two concurrent
 * creates on one user can both pick the same id. Deleting a group does not
 * renumber the others, and a later create can reuse a deleted group's id.
 * Both behaviours are long-standing and clients rely on the numbering, so
 * they are kept.
 *
 * # Append Response
 *
 * Appending a note answers with the notes of ALL groups of the user keyed
 * by `groupId - 1`, the shape existing clients consume.
 */
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::notes::{validate_user_id, INVALID_USER_ID, USER_NOT_FOUND};
use crate::backend::store::UserStore;
use crate::shared::api::CreateGroupRequest;
use crate::shared::{notes_by_group_offset, parse_group_id, Group, GroupedNotes, Note, User};

const GROUP_NOT_FOUND_OR_UNCHANGED: &str = "Group not found or no change made";
const GROUP_NOT_FOUND: &str = "Group not found";
const IDS_REQUIRED: &str = "User ID and Group ID are required";

/// Write side of the groups API
#[derive(Clone)]
pub struct GroupMutator {
    store: Arc<dyn UserStore>,
}

fn required(value: Option<String>, field: &str) -> Result<String, BackendError> {
    value.ok_or_else(|| BackendError::invalid_input(format!("{} is required", field)))
}

impl GroupMutator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a group under a user, optionally seeded with notes
    ///
    /// Returns the full updated user document.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - a required field is missing or the user id is malformed
    /// * `NotFound` - no such user
    /// * `StoreFailure` - a store call failed
    pub async fn create_group(&self, request: CreateGroupRequest) -> Result<User, BackendError> {
        let user_id = required(request.user_id, "userId")?;
        let group_name = required(request.group_name, "groupName")?;
        let group_color = required(request.group_color, "groupColor")?;
        let short_form = required(request.short_form, "shortForm")?;
        let id = validate_user_id(&user_id, INVALID_USER_ID)?;

        let user = self
            .store
            .find_user(&id)
            .await
            .map_err(|e| BackendError::store("Error creating note", e))?
            .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

        let group_id = user.groups.len() as i64 + 1;
        let group = Group::new(
            group_id,
            group_name,
            group_color,
            short_form,
            request.notes.unwrap_or_default(),
        );

        let updated = self
            .store
            .push_group(&id, group)
            .await
            .map_err(|e| BackendError::store("Error creating note", e))?
            .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

        tracing::info!("Created group {} for user {}", group_id, id);
        Ok(updated)
    }

    /// Append one note to a group
    ///
    /// `note` is appended as a single element even when it is itself an
    /// array; duplicates are kept.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - malformed user id or no note supplied
    /// * `NotFound` - no such user, no such group, or nothing changed
    /// * `StoreFailure` - the store update failed
    pub async fn append_note(
        &self,
        user_id: &str,
        group_id: &str,
        note: Option<Note>,
    ) -> Result<GroupedNotes, BackendError> {
        let id = validate_user_id(user_id, INVALID_USER_ID)?;
        let note = note.ok_or_else(|| BackendError::invalid_input("notes is required"))?;
        let group_id = parse_group_id(group_id)
            .ok_or_else(|| BackendError::not_found(GROUP_NOT_FOUND_OR_UNCHANGED))?;

        let groups = self
            .store
            .push_note(&id, group_id, note)
            .await
            .map_err(|e| BackendError::store("Error updating note", e))?
            .ok_or_else(|| BackendError::not_found(GROUP_NOT_FOUND_OR_UNCHANGED))?;

        tracing::info!("Appended note to group {} of user {}", group_id, id);
        Ok(notes_by_group_offset(&groups))
    }

    /// Delete a group and all of its notes
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - either id is empty, or the user id is malformed
    /// * `NotFound` - no document was modified
    /// * `StoreFailure` - the store update failed
    pub async fn delete_group(&self, user_id: &str, group_id: &str) -> Result<(), BackendError> {
        if user_id.is_empty() || group_id.is_empty() {
            return Err(BackendError::invalid_input(IDS_REQUIRED));
        }
        let id = validate_user_id(user_id, INVALID_USER_ID)?;
        let group_id =
            parse_group_id(group_id).ok_or_else(|| BackendError::not_found(GROUP_NOT_FOUND))?;

        let modified = self
            .store
            .pull_group(&id, group_id)
            .await
            .map_err(|e| BackendError::store("Error deleting group", e))?;

        if modified == 0 {
            return Err(BackendError::not_found(GROUP_NOT_FOUND));
        }

        tracing::info!("Deleted group {} of user {}", group_id, id);
        Ok(())
    }
}
