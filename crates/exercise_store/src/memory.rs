//! In-memory exercise store implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::User;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ExerciseStore, TrackerError, TrackerResult, UserFilter};

/// In-memory document store for user aggregates.
///
/// Iteration order over stored users is unspecified.
#[derive(Debug, Default)]
pub struct MemoryExerciseStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryExerciseStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseStore for MemoryExerciseStore {
    async fn insert_user(&self, user: User) -> TrackerResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(TrackerError::Persistence(format!(
                "duplicate user id: {}",
                user.id
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_users(&self, filter: UserFilter) -> TrackerResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| {
                filter.id.is_none_or(|id| u.id == id)
                    && filter
                        .username
                        .as_deref()
                        .is_none_or(|name| u.username == name)
            })
            .cloned()
            .collect())
    }

    async fn save_user(&self, user: User) -> TrackerResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(TrackerError::not_found("User", user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
