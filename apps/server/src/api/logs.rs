//! Exercise log API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use exercise_store::{ExerciseStore, LogPage, TrackerError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for appending an exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct AddExerciseRequest {
    pub description: String,
    /// Duration in minutes, as submitted (validated server-side).
    pub duration: String,
    /// Optional `YYYY-MM-DD` date; defaults to today.
    pub date: Option<String>,
}

/// Response body for a newly appended exercise.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: u32,
    pub date: String,
}

/// Query parameters for log retrieval.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Parses a user id from a path segment.
fn parse_user_id(raw: &str) -> Result<Uuid, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid user id".to_string()))
}

/// Appends an exercise to a user's log.
pub async fn add_exercise<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(request): Json<AddExerciseRequest>,
) -> ServerResult<Json<ExerciseResponse>> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .appender
        .append(
            user_id,
            &request.description,
            &request.duration,
            request.date.as_deref(),
        )
        .await?;

    // The appended entry is always the tail of the log
    let entry = user.log.last().ok_or_else(|| {
        ServerError::Tracker(TrackerError::Persistence(
            "appended entry missing from saved log".to_string(),
        ))
    })?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username.clone(),
        description: entry.description.clone(),
        duration: entry.duration,
        date: entry.date_display(),
    }))
}

/// Returns a user's log filtered by date range and entry limit.
pub async fn get_logs<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> ServerResult<Json<LogPage>> {
    let user_id = parse_user_id(&id)?;

    let page = state
        .query
        .get_logs(
            user_id,
            query.from.as_deref(),
            query.to.as_deref(),
            query.limit.as_deref(),
        )
        .await?;

    Ok(Json(page))
}
