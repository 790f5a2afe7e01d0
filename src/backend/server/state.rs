/**
 * Application State Management
 *
 * Defines the application state structure and the `FromRef` implementations
 * that let handlers extract only the component they need.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The user store (`Arc<dyn UserStore>`), in memory or PostgreSQL
 * - The group accessor and mutator built on that store
 * - Session keys for issuing and verifying tokens
 * - The bcrypt cost used at signup
 *
 * Every field is cheap to clone; the store sits behind an `Arc`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use groupnotes::backend::notes::GroupAccessor;
 *
 * async fn handler(State(accessor): State<GroupAccessor>) {
 *     let _ = accessor.list_groups("0123456789abcdef01234567").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::notes::{GroupAccessor, GroupMutator};
use crate::backend::server::config::ServerConfig;
use crate::backend::store::UserStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Backing store for user documents
    pub store: Arc<dyn UserStore>,

    /// Read operations (listGroups, listNotes)
    pub accessor: GroupAccessor,

    /// Write operations (createGroup, appendNote, deleteGroup)
    pub mutator: GroupMutator,

    /// JWT signing and verification keys
    pub sessions: SessionKeys,

    /// bcrypt work factor for new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Wire the state around a store
    pub fn new(store: Arc<dyn UserStore>, config: &ServerConfig) -> Self {
        Self {
            accessor: GroupAccessor::new(store.clone()),
            mutator: GroupMutator::new(store.clone()),
            store,
            sessions: SessionKeys::new(&config.jwt_secret, config.token_ttl_secs),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for GroupAccessor {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accessor.clone()
    }
}

impl FromRef<AppState> for GroupMutator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mutator.clone()
    }
}

/// Lets the auth middleware take `State<SessionKeys>`
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
