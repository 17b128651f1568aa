//! Storage contract for user aggregates.

use async_trait::async_trait;
use entities::User;
use uuid::Uuid;

use crate::TrackerResult;

/// Equality filter for looking up users.
///
/// An empty filter matches every user.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Match a specific user id.
    pub id: Option<Uuid>,
    /// Match an exact username.
    pub username: Option<String>,
}

impl UserFilter {
    /// Filter matching a single user id.
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Filter matching an exact username.
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }
}

/// Trait for user aggregate storage.
///
/// Implementations behave as an opaque document store: whole `User`
/// documents addressed by id, with equality lookups and whole-document
/// replacement. No ordering is defined for multi-document results, and no
/// transactions are required.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Inserts a new user document.
    async fn insert_user(&self, user: User) -> TrackerResult<User>;

    /// Finds users matching the filter.
    async fn find_users(&self, filter: UserFilter) -> TrackerResult<Vec<User>>;

    /// Replaces an existing user document by id.
    async fn save_user(&self, user: User) -> TrackerResult<User>;
}
