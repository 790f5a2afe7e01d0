/**
 * Document Model
 *
 * This module defines the user document and the group and note values it
 * embeds. The JSON field names match what clients have always received
 * (`_id`, `groupId`, `groupName`, `groupColor`, `shortForm`, `notes`).
 *
 * # Ownership
 *
 * - A `Group` belongs to exactly one `User`
 * - A `Note` belongs to exactly one `Group`
 * - Groups keep insertion order; notes keep insertion order and may repeat
 */
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::ids::UserId;

/// A single note
///
/// Notes are schema-less: any JSON value the client sends is stored and
/// returned unchanged (typically an object such as `{ text, timestamp }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(pub serde_json::Value);

impl Note {
    /// Wrap a JSON value as a note
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Note {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Note {
    fn from(text: &str) -> Self {
        Self(serde_json::Value::String(text.to_string()))
    }
}

/// A group of notes owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Position-derived id, unique among the user's groups at creation time
    pub group_id: i64,
    /// Display label
    pub group_name: String,
    /// Display color token
    pub group_color: String,
    /// Abbreviation label
    pub short_form: String,
    /// Notes in insertion order
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Group {
    /// Create a group
    pub fn new(
        group_id: i64,
        group_name: impl Into<String>,
        group_color: impl Into<String>,
        short_form: impl Into<String>,
        notes: Vec<Note>,
    ) -> Self {
        Self {
            group_id,
            group_name: group_name.into(),
            group_color: group_color.into(),
            short_form: short_form.into(),
            notes,
        }
    }

    /// Metadata-only view of this group
    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            group_id: self.group_id,
            group_name: self.group_name.clone(),
            group_color: self.group_color.clone(),
            short_form: self.short_form.clone(),
        }
    }
}

/// Group metadata without its notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group_id: i64,
    pub group_name: String,
    pub group_color: String,
    pub short_form: String,
}

/// A user document
///
/// Credentials are stored alongside the document but never leave the store
/// as part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id, immutable
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Login email
    pub email: String,
    /// Groups in insertion order
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Notes of every group keyed by `groupId - 1`
///
/// Clients index their local group arrays with this key, so it is kept as
/// is. Serialized as a JSON object with ascending numeric string keys.
pub type GroupedNotes = BTreeMap<i64, Vec<Note>>;

/// Build the `groupId - 1` keyed view of all groups
///
/// When two groups share a `groupId` the later one wins.
pub fn notes_by_group_offset(groups: &[Group]) -> GroupedNotes {
    groups
        .iter()
        .map(|group| (group.group_id - 1, group.notes.clone()))
        .collect()
}
