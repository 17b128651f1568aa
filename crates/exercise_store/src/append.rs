//! Exercise validation and appending.

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use entities::{Exercise, User, parse_date};
use uuid::Uuid;

use crate::{ExerciseStore, TrackerError, TrackerResult, UserDirectory};

/// Appends validated exercise entries to a user's log.
///
/// Appending is a read-modify-write over whole user documents; concurrent
/// appends to the same user are last-write-wins.
pub struct LogAppender<S> {
    users: UserDirectory<S>,
    store: Arc<S>,
}

impl<S: ExerciseStore> LogAppender<S> {
    /// Creates a new appender over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: UserDirectory::new(Arc::clone(&store)),
            store,
        }
    }

    /// Validates and appends one exercise entry to the user's log.
    ///
    /// Returns the updated user with the new entry visible. The entry is
    /// appended at the end of the log regardless of its date; the log is
    /// never re-sorted.
    pub async fn append(
        &self,
        user_id: Uuid,
        description: &str,
        duration: &str,
        date: Option<&str>,
    ) -> TrackerResult<User> {
        let mut user = self.users.find_by_id(user_id).await?;

        let description = validate_description(description)?;
        let duration = validate_duration(duration)?;
        let date = normalize_date(date)?;

        user.log.push(Exercise::new(description, duration, date));
        user.updated_at = Utc::now();

        let user = self.store.save_user(user).await?;
        tracing::info!(user_id = %user.id, entries = user.log.len(), "Exercise appended");
        Ok(user)
    }
}

/// Validates that a description is non-empty.
fn validate_description(raw: &str) -> TrackerResult<String> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(TrackerError::validation(
            "description",
            "must not be empty",
        ));
    }
    Ok(description.to_string())
}

/// Validates that a duration is a positive whole number of minutes.
fn validate_duration(raw: &str) -> TrackerResult<u32> {
    let duration: u32 = raw.trim().parse().map_err(|_| {
        TrackerError::validation("duration", "must be a whole number of minutes")
    })?;
    if duration == 0 {
        return Err(TrackerError::validation("duration", "must be positive"));
    }
    Ok(duration)
}

/// Resolves the entry date: today when absent or empty, otherwise a
/// `YYYY-MM-DD` calendar date.
///
/// Malformed dates are rejected; no sentinel value ever reaches the store.
fn normalize_date(raw: Option<&str>) -> TrackerResult<NaiveDate> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Local::now().date_naive()),
        Some(raw) => {
            parse_date(raw).ok_or_else(|| TrackerError::validation("date", "expected YYYY-MM-DD"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryExerciseStore;

    struct Fixture {
        users: UserDirectory<MemoryExerciseStore>,
        appender: LogAppender<MemoryExerciseStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryExerciseStore::new());
        Fixture {
            users: UserDirectory::new(Arc::clone(&store)),
            appender: LogAppender::new(store),
        }
    }

    #[tokio::test]
    async fn test_append_then_read() {
        let fx = fixture();
        let user = fx.users.create_or_get("alice").await.unwrap();

        let updated = fx
            .appender
            .append(user.id, "run", "30", Some("2024-01-01"))
            .await
            .unwrap();

        assert_eq!(updated.log.len(), 1);
        assert_eq!(updated.log[0].description, "run");
        assert_eq!(updated.log[0].duration, 30);
        assert_eq!(updated.log[0].date_display(), "Mon Jan 01 2024");

        // The appended entry is visible on a fresh read
        let reread = fx.users.find_by_id(user.id).await.unwrap();
        assert_eq!(reread.log.len(), 1);
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let fx = fixture();
        let user = fx.users.create_or_get("alice").await.unwrap();

        fx.appender
            .append(user.id, "swim", "20", Some("2024-03-01"))
            .await
            .unwrap();
        let updated = fx
            .appender
            .append(user.id, "run", "30", Some("2024-01-01"))
            .await
            .unwrap();

        // Appended with an earlier date, but still at the tail
        assert_eq!(updated.log[0].description, "swim");
        assert_eq!(updated.log[1].description, "run");
    }

    #[tokio::test]
    async fn test_append_defaults_to_today() {
        let fx = fixture();
        let user = fx.users.create_or_get("alice").await.unwrap();

        let updated = fx.appender.append(user.id, "run", "30", None).await.unwrap();
        assert_eq!(updated.log[0].date, Local::now().date_naive());

        let updated = fx
            .appender
            .append(user.id, "row", "15", Some(""))
            .await
            .unwrap();
        assert_eq!(updated.log[1].date, Local::now().date_naive());
    }

    #[tokio::test]
    async fn test_append_unknown_user() {
        let fx = fixture();

        let err = fx
            .appender
            .append(Uuid::new_v4(), "run", "30", None)
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_append_rejects_invalid_fields() {
        let fx = fixture();
        let user = fx.users.create_or_get("alice").await.unwrap();

        for (description, duration, date) in [
            ("", "30", None),
            ("run", "half an hour", None),
            ("run", "-5", None),
            ("run", "0", None),
            ("run", "30", Some("not-a-date")),
        ] {
            let err = fx
                .appender
                .append(user.id, description, duration, date)
                .await
                .unwrap_err();
            assert!(matches!(err, TrackerError::Validation { .. }));
        }

        // Nothing malformed was persisted
        let reread = fx.users.find_by_id(user.id).await.unwrap();
        assert!(reread.log.is_empty());
    }
}
