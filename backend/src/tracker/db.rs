//! Tracker database operations
//!
//! Handles all database interactions for users and exercises.

use crate::error::AppError;
use crate::tracker::models::{Exercise, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const SCHEMA_SQL: &str = include_str!("../../migrations/001_create_tracker.sql");

/// Range and size constraints for an exercise log query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub from: String,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub to: String,
    /// Maximum number of entries; `None` means unbounded
    pub limit: Option<u32>,
}

/// Database connection pool for tracker operations
pub struct TrackerDb {
    pool: SqlitePool,
}

impl TrackerDb {
    /// Initialize database connection pool
    ///
    /// # Arguments
    /// * `db_url` - SQLite connection string (`sqlite:...`) or plain file path
    /// * `max_connections` - Pool size
    ///
    /// # Returns
    /// * `Ok(TrackerDb)` if successful
    /// * `Err(AppError)` if connection or schema bootstrap failed
    pub async fn new(db_url: &str, max_connections: u32) -> Result<Self, AppError> {
        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_url.starts_with("sqlite:") {
            db_url.to_string()
        } else {
            format!("sqlite:{}", db_url)
        };

        // Ensure parent directory exists for file-backed databases
        let file_path = connection_string
            .trim_start_matches("sqlite:")
            .trim_start_matches("//")
            .split('?')
            .next()
            .unwrap_or_default();
        if let Some(parent) = Path::new(file_path).parent() {
            if !parent.as_os_str().is_empty() && !file_path.starts_with(':') {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database url: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e))
            })?;

        info!("Connected to SQLite database at: {}", db_url);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Create tables and indexes if they do not exist yet
    async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");

        for statement in split_statements(SCHEMA_SQL) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!(
                        "Migration failed: {} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Insert a new user
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
            .bind(&user.id)
            .bind(&user.username)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::storage("User creation failed!"))?;

        debug!("Created user: {}", user.id);
        Ok(())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::storage("Looking up the user failed!"))?;

        Ok(user)
    }

    /// Get all users in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users ORDER BY rowid ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::storage("Getting all users failed!"))?;

        Ok(users)
    }

    /// Delete every user, returning how many were removed
    ///
    /// Exercises are left untouched.
    pub async fn delete_all_users(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(AppError::storage("Deleting all users failed!"))?;

        Ok(result.rows_affected())
    }

    /// Insert a new exercise
    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO exercises (id, user_id, username, description, duration, date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&exercise.id)
        .bind(&exercise.user_id)
        .bind(&exercise.username)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(&exercise.date)
        .bind(exercise.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::storage("Exercise creation failed!"))?;

        debug!(
            "Created exercise {} for user {}",
            exercise.id, exercise.user_id
        );
        Ok(())
    }

    /// Get a user's exercises within `filter`, ordered by date then insertion
    pub async fn find_exercises(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = filter.limit.map(i64::from).unwrap_or(-1);

        let exercises = sqlx::query_as::<_, Exercise>(
            "SELECT id, user_id, username, description, duration, date, created_at FROM exercises WHERE user_id = ? AND date >= ? AND date <= ? ORDER BY date ASC, rowid ASC LIMIT ?",
        )
        .bind(user_id)
        .bind(&filter.from)
        .bind(&filter.to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::storage("Failed to retrieve user exercises!"))?;

        Ok(exercises)
    }

    /// Delete every exercise, returning how many were removed
    pub async fn delete_all_exercises(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM exercises")
            .execute(&self.pool)
            .await
            .map_err(AppError::storage("Deleting all exercises failed!"))?;

        Ok(result.rows_affected())
    }
}

/// Strip `--` comments and split a SQL script into individual statements
fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in sql.lines() {
        let without_comments = match line.find("--") {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let trimmed = without_comments.trim();
        if trimmed.is_empty() {
            continue;
        }
        cleaned_sql.push_str(trimmed);
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
