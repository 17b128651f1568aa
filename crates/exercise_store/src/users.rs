//! User lookup and creation.

use std::sync::Arc;

use entities::{User, UserSummary};
use uuid::Uuid;

use crate::{ExerciseStore, TrackerError, TrackerResult, UserFilter};

/// Create-or-get and lookup operations over stored users.
pub struct UserDirectory<S> {
    store: Arc<S>,
}

impl<S> Clone for UserDirectory<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ExerciseStore> UserDirectory<S> {
    /// Creates a new directory over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the user with this exact username, creating it on first
    /// use.
    ///
    /// Idempotent: calling twice with the same username returns the same
    /// user unchanged, and only the create path writes to the store.
    pub async fn create_or_get(&self, username: &str) -> TrackerResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(TrackerError::validation("username", "must not be empty"));
        }

        let existing = self
            .store
            .find_users(UserFilter::by_username(username))
            .await?;
        if let Some(user) = existing.into_iter().next() {
            return Ok(user);
        }

        let user = self.store.insert_user(User::new(username)).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Lists all users projected to id and username.
    ///
    /// Order is storage-native and unspecified; callers must not rely on
    /// it.
    pub async fn list(&self) -> TrackerResult<Vec<UserSummary>> {
        let users = self.store.find_users(UserFilter::default()).await?;
        Ok(users.iter().map(User::summary).collect())
    }

    /// Returns the user with this id.
    pub async fn find_by_id(&self, id: Uuid) -> TrackerResult<User> {
        let users = self.store.find_users(UserFilter::by_id(id)).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| TrackerError::not_found("User", id.to_string()))
    }
}
