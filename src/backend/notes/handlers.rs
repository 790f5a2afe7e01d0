//! Groups HTTP Handlers
//!
//! Thin Axum adapters over `GroupAccessor` and `GroupMutator`. All routes
//! sit behind the auth middleware; handlers that change data log the
//! authenticated caller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};
use crate::backend::notes::{GroupAccessor, GroupMutator};
use crate::shared::api::{AppendNoteRequest, AppendNoteResponse, CreateGroupRequest, MessageResponse};
use crate::shared::{GroupSummary, Note, User};

/// `GET /api/{user_id}` - group summaries
pub async fn list_groups(
    State(accessor): State<GroupAccessor>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<GroupSummary>>, BackendError> {
    let groups = accessor.list_groups(&user_id).await?;
    Ok(Json(groups))
}

/// `GET /api/{user_id}/notes` - notes per group, positional
pub async fn list_notes(
    State(accessor): State<GroupAccessor>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Vec<Note>>>, BackendError> {
    let notes = accessor.list_notes(&user_id).await?;
    Ok(Json(notes))
}

/// `POST /api` - create a group, answers 201 with the full user
pub async fn create_group(
    State(mutator): State<GroupMutator>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<CreateGroupRequest>,
) -> Result<(StatusCode, Json<User>), BackendError> {
    tracing::debug!("create_group requested by {}", caller.user_id);
    let user = mutator.create_group(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PATCH|POST /api/{user_id}/{group_id}` - append one note
pub async fn append_note(
    State(mutator): State<GroupMutator>,
    AuthUser(caller): AuthUser,
    Path((user_id, group_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<AppendNoteRequest>,
) -> Result<Json<AppendNoteResponse>, BackendError> {
    tracing::debug!("append_note requested by {}", caller.user_id);
    let data = mutator.append_note(&user_id, &group_id, request.notes).await?;
    Ok(Json(AppendNoteResponse {
        data,
        message: "Note added successfully".to_string(),
    }))
}

/// `DELETE /api/{user_id}/{group_id}` - remove a group and its notes
pub async fn delete_group(
    State(mutator): State<GroupMutator>,
    AuthUser(caller): AuthUser,
    Path((user_id, group_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::debug!("delete_group requested by {}", caller.user_id);
    mutator.delete_group(&user_id, &group_id).await?;
    Ok(Json(MessageResponse::new("Group deleted successfully")))
}
