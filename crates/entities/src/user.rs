//! User aggregate definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Exercise;

/// A user and their full exercise log.
///
/// The log is append-only and preserves insertion order, which is not
/// necessarily chronological order of the entry dates. The entry count is
/// never stored; it is derived at read time from the (possibly filtered)
/// log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Username. Treated as a natural key by create-or-get; storage does
    /// not enforce uniqueness.
    pub username: String,
    /// Exercise log in append order.
    pub log: Vec<Exercise>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with an empty log.
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            log: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the id/username projection of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Projection of a user to identity fields only, as returned by
/// list-users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique identifier.
    pub id: Uuid,
    /// Username.
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("alice");

        assert_eq!(user.username, "alice");
        assert!(user.log.is_empty());
    }

    #[test]
    fn test_user_summary_projection() {
        let user = User::new("alice");
        let summary = user.summary();

        assert_eq!(summary.id, user.id);
        assert_eq!(summary.username, "alice");
    }
}
