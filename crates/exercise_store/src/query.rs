//! Log filtering, truncation, and formatting.

use std::sync::Arc;

use chrono::NaiveDate;
use entities::{format_date, parse_date};
use serde::Serialize;
use uuid::Uuid;

use crate::{ExerciseStore, TrackerError, TrackerResult, UserDirectory};

/// One formatted log entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Entry date in display form, e.g. "Mon Jan 01 2024".
    pub date: String,
}

/// A filtered view of a user's log.
#[derive(Debug, Clone, Serialize)]
pub struct LogPage {
    /// User id.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Number of entries in `log` after filtering and truncation, not the
    /// full log length.
    pub count: usize,
    /// Surviving entries in append order.
    pub log: Vec<LogEntry>,
}

/// Filters and formats user logs.
pub struct LogQueryEngine<S> {
    users: UserDirectory<S>,
}

impl<S: ExerciseStore> LogQueryEngine<S> {
    /// Creates a new query engine over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: UserDirectory::new(store),
        }
    }

    /// Returns the user's log filtered by date bounds and truncated by
    /// entry limit.
    ///
    /// Date bounds are inclusive calendar-date comparisons. `limit` keeps
    /// the first N entries of the filtered, append-ordered sequence
    /// (head-truncation, not most-recent-N).
    pub async fn get_logs(
        &self,
        user_id: Uuid,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> TrackerResult<LogPage> {
        let user = self.users.find_by_id(user_id).await?;

        let from = parse_bound("from", from)?;
        let to = parse_bound("to", to)?;
        let limit = parse_limit(limit)?;

        let log: Vec<LogEntry> = user
            .log
            .iter()
            .filter(|e| from.is_none_or(|bound| e.date >= bound))
            .filter(|e| to.is_none_or(|bound| e.date <= bound))
            .take(limit.unwrap_or(usize::MAX))
            .map(|e| LogEntry {
                description: e.description.clone(),
                duration: e.duration,
                date: format_date(e.date),
            })
            .collect();

        Ok(LogPage {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        })
    }
}

/// Parses an optional `YYYY-MM-DD` date bound.
fn parse_bound(field: &'static str, raw: Option<&str>) -> TrackerResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| TrackerError::validation(field, "expected YYYY-MM-DD")),
    }
}

/// Parses an optional entry limit.
fn parse_limit(raw: Option<&str>) -> TrackerResult<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| TrackerError::validation("limit", "expected a non-negative integer")),
    }
}
