//! Tracker data models
//!
//! Defines structures for users and their exercise records.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Unique identifier for users and exercises
pub type RecordId = String;

/// Generate a new unique record identifier
pub fn generate_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier for the user
    pub id: RecordId,
    /// Display name (not required to be unique)
    pub username: String,
    /// When the user was created (Unix timestamp)
    pub created_at: i64,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(username: String) -> Self {
        Self {
            id: generate_id(),
            username,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// A logged exercise
///
/// `username` is a snapshot of the owner's name taken at creation time and
/// is never re-synced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: RecordId,
    /// ID of the user this exercise belongs to
    pub user_id: RecordId,
    /// Username copied from the owning user
    pub username: String,
    /// What was done
    pub description: String,
    /// Duration, in whatever unit the client uses
    pub duration: i64,
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// When the exercise was recorded (Unix timestamp)
    pub created_at: i64,
}

impl Exercise {
    /// Create a new exercise for `user`
    pub fn new(user: &User, description: String, duration: i64, date: String) -> Self {
        Self {
            id: generate_id(),
            user_id: user.id.clone(),
            username: user.username.clone(),
            description,
            duration,
            date,
            created_at: Utc::now().timestamp(),
        }
    }
}
