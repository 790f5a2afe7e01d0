//! API Request and Response Bodies
//!
//! JSON bodies exchanged on the `/api` and `/auth` routes. Request fields
//! that the API requires are still `Option` here so that a missing field is
//! reported as a 400 with the field name instead of a generic body
//! rejection.

use serde::{Deserialize, Serialize};

use crate::shared::notes::{GroupedNotes, Note};

/// Body of `POST /api`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub user_id: Option<String>,
    pub group_name: Option<String>,
    pub group_color: Option<String>,
    pub short_form: Option<String>,
    /// Notes to seed the group with, in order
    pub notes: Option<Vec<Note>>,
}

/// Body of `PATCH /api/{userId}/{groupId}`
///
/// `notes` carries ONE note value despite the plural name; it is appended
/// as a single element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendNoteRequest {
    pub notes: Option<Note>,
}

/// Response of a successful append
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendNoteResponse {
    pub data: GroupedNotes,
    pub message: String,
}

/// Plain `{ message }` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// Login email, must contain '@'
    pub email: String,
    /// Plain password (hashed before storage, at least 8 characters)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by signup and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Bearer token for the `/api` routes
    pub token: String,
    pub user: UserResponse,
}

/// User information that is safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}
