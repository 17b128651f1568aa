//! User management API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use exercise_store::ExerciseStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServerResult;
use crate::state::AppState;

/// Request body for creating (or fetching) a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// A user projected to identity fields.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
}

/// Creates a user, or returns the existing one with the same username.
pub async fn create_user<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateUserRequest>,
) -> ServerResult<Json<UserResponse>> {
    let user = state.users.create_or_get(&request.username).await?;

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

/// Lists all users.
///
/// Order is unspecified.
pub async fn list_users<S: ExerciseStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                username: u.username,
            })
            .collect(),
    ))
}
