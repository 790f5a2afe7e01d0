/**
 * In-Memory User Store
 *
 * A `UserStore` backed by a map behind a `tokio::sync::RwLock`. Each trait
 * method takes the lock exactly once, so every operation is atomic for the
 * document it touches, the same guarantee the database store gives.
 *
 * Used when `DATABASE_URL` is not configured and by the test-suite. Data
 * does not survive a restart.
 */
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Credentials, NewUser, StoreError, UserStore};
use crate::shared::{Group, GroupSummary, Note, User, UserId};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// Process-local user store
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, StoredUser>>>,
    operations: Arc<AtomicU64>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations served so far
    pub fn operations(&self) -> u64 {
        self.operations.load(Ordering::SeqCst)
    }

    /// Insert a fully formed user document, replacing any with the same id
    pub async fn put_user(&self, user: User, password_hash: impl Into<String>) {
        let mut users = self.users.write().await;
        users.insert(
            user.id,
            StoredUser {
                user,
                password_hash: password_hash.into(),
            },
        );
    }

    fn record(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.record();
        let mut users = self.users.write().await;

        if users.values().any(|stored| stored.user.email == new_user.email) {
            return Err(StoreError::Conflict(format!(
                "email already registered: {}",
                new_user.email
            )));
        }

        let user = User {
            id: UserId::generate(),
            email: new_user.email,
            groups: Vec::new(),
        };
        users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_hash: new_user.password_hash,
            },
        );
        Ok(user)
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError> {
        self.record();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|stored| stored.user.email == email)
            .map(|stored| Credentials {
                id: stored.user.id,
                email: stored.user.email.clone(),
                password_hash: stored.password_hash.clone(),
            }))
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        self.record();
        let users = self.users.read().await;
        Ok(users.get(id).map(|stored| stored.user.clone()))
    }

    async fn group_summaries(&self, id: &UserId) -> Result<Option<Vec<GroupSummary>>, StoreError> {
        self.record();
        let users = self.users.read().await;
        Ok(users
            .get(id)
            .map(|stored| stored.user.groups.iter().map(Group::summary).collect()))
    }

    async fn group_notes(&self, id: &UserId) -> Result<Option<Vec<Vec<Note>>>, StoreError> {
        self.record();
        let users = self.users.read().await;
        Ok(users.get(id).map(|stored| {
            stored
                .user
                .groups
                .iter()
                .map(|group| group.notes.clone())
                .collect()
        }))
    }

    async fn push_group(&self, id: &UserId, group: Group) -> Result<Option<User>, StoreError> {
        self.record();
        let mut users = self.users.write().await;
        Ok(users.get_mut(id).map(|stored| {
            stored.user.groups.push(group);
            stored.user.clone()
        }))
    }

    async fn push_note(
        &self,
        id: &UserId,
        group_id: i64,
        note: Note,
    ) -> Result<Option<Vec<Group>>, StoreError> {
        self.record();
        let mut users = self.users.write().await;
        let Some(stored) = users.get_mut(id) else {
            return Ok(None);
        };

        let mut matched = false;
        for group in stored.user.groups.iter_mut().filter(|g| g.group_id == group_id) {
            group.notes.push(note.clone());
            matched = true;
        }

        Ok(matched.then(|| stored.user.groups.clone()))
    }

    async fn pull_group(&self, id: &UserId, group_id: i64) -> Result<u64, StoreError> {
        self.record();
        let mut users = self.users.write().await;
        let Some(stored) = users.get_mut(id) else {
            return Ok(0);
        };

        let before = stored.user.groups.len();
        stored.user.groups.retain(|group| group.group_id != group_id);
        Ok(u64::from(stored.user.groups.len() != before))
    }
}
