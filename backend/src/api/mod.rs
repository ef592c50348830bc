//! API module
//!
//! Contains HTTP request handlers for the exercise tracker endpoints and
//! the router that wires them together.

pub mod exercises;
pub mod extract;
pub mod logs;
pub mod pages;
pub mod users;
pub mod utils;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all endpoints
///
/// Middleware and static-file fallback are layered on by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/delete", get(users::delete_all_users))
        .route(
            "/api/users/:id/exercises",
            post(exercises::create_exercise),
        )
        .route("/api/users/:id/logs", get(logs::get_logs))
        .route("/api/exercises/delete", get(exercises::delete_all_exercises))
        .with_state(state)
}
