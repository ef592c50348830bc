//! User management API handlers
//!
//! Contains HTTP request handlers for creating, listing and bulk-deleting users.

use crate::api::extract::JsonOrForm;
use crate::api::utils::require;
use crate::error::AppError;
use crate::state::AppState;
use crate::tracker::User;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Shown instead of an empty list when no users exist
pub const NO_USERS_MESSAGE: &str = "There are no users in the database!";

/// User response type
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Username as given at creation
    pub username: String,
    /// Unique identifier for the user
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Bulk deletion response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Number of records removed
    pub deleted: u64,
}

/// Users list response
///
/// Clients receive either the array of users or, when there are none, a
/// message object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UsersListResponse {
    /// At least one user exists
    Users(Vec<UserResponse>),
    /// The collection is empty
    Empty(MessageResponse),
}

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Name for the new user; empty strings are accepted
    pub username: Option<String>,
}

/// GET /api/users - List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersListResponse>, AppError> {
    let users = state.db.list_users().await?;

    if users.is_empty() {
        return Ok(Json(UsersListResponse::Empty(MessageResponse {
            message: NO_USERS_MESSAGE.to_string(),
        })));
    }

    tracing::debug!(count = users.len(), "Users in database");
    Ok(Json(UsersListResponse::Users(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// POST /api/users - Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let username = require(request.username, "username")?;
    let user = User::new(username);
    state.db.create_user(&user).await?;

    info!(user_id = %user.id, username = %user.username, "User created");
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users/delete - Delete every user
///
/// Intended for resetting test data. Exercises are not removed.
pub async fn delete_all_users(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.db.delete_all_users().await?;

    info!(deleted, "All users deleted");
    Ok(Json(DeleteResponse {
        message: "All users have been deleted!".to_string(),
        deleted,
    }))
}
