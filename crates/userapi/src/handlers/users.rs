//! User CRUD handlers.
//!
//! These handlers use the repository trait object held in `AppState`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use userapi_core::storage::RepositoryError;
use userapi_core::user::{apply_changes, NewUser, User, UserId};

use crate::{handlers::AppError, state::AppState};

/// Create a new user (POST /api/users).
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create user request");

    let user = state.user_repo.create_user(&payload).await?;

    tracing::info!(user_id = user.id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users (GET /api/users).
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_repo.list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");

    Ok(Json(users))
}

/// Get a single user by ID (GET /api/users/{id}).
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    let user = find_user(&state, id).await?;
    tracing::debug!(user_id = id, "Fetched user");

    Ok(Json(user))
}

/// Update an existing user (PUT /api/users/{id}).
///
/// Reads the stored user, overwrites its name and email and saves it back.
/// Concurrent updates to the same id are last-write-wins.
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    let Json(changes) = payload?;

    let existing = find_user(&state, id).await?;
    let user = state
        .user_repo
        .update_user(&apply_changes(existing, changes))
        .await?;

    tracing::info!(user_id = user.id, "Updated user");

    Ok(Json(user))
}

/// Delete a user (DELETE /api/users/{id}).
///
/// Succeeds whether or not the user existed.
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<String, AppError> {
    let Path(id) = id?;
    state.user_repo.delete_user(id).await?;

    tracing::info!(user_id = id, "Deleted user");

    Ok(format!("User with ID {id} deleted successfully."))
}

async fn find_user(state: &AppState, id: UserId) -> Result<User, AppError> {
    state
        .user_repo
        .get_user(id)
        .await?
        .ok_or_else(|| RepositoryError::user_not_found(id).into())
}
