//! Exercise log query handler

use crate::api::utils::build_log_filter;
use crate::error::AppError;
use crate::state::AppState;
use crate::tracker::dates;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Query parameters for the log endpoint
///
/// Kept as raw strings so malformed values produce descriptive validation
/// errors.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub to: Option<String>,
    /// Maximum entries; `0` or absent means no limit
    pub limit: Option<String>,
}

/// A single log entry
#[derive(Debug, Serialize)]
pub struct LogEntry {
    /// What was done
    pub description: String,
    /// Stored duration
    pub duration: i64,
    /// Human-readable date
    pub date: String,
}

/// Exercise log response
#[derive(Debug, Serialize)]
pub struct LogResponse {
    /// User id
    #[serde(rename = "_id")]
    pub id: String,
    /// Current username
    pub username: String,
    /// Number of entries in `log`
    pub count: usize,
    /// Matching exercises, oldest first
    pub log: Vec<LogEntry>,
}

/// GET /api/users/:id/logs - Query a user's exercise log
pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogResponse>, AppError> {
    let filter = build_log_filter(
        query.from.as_deref(),
        query.to.as_deref(),
        query.limit.as_deref(),
    )?;

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(user_id.clone()))?;

    let log: Vec<LogEntry> = state
        .db
        .find_exercises(&user.id, &filter)
        .await?
        .into_iter()
        .map(|exercise| LogEntry {
            date: dates::display_stored(&exercise.date),
            description: exercise.description,
            duration: exercise.duration,
        })
        .collect();

    tracing::debug!(
        user_id = %user.id,
        from = %filter.from,
        to = %filter.to,
        limit = ?filter.limit,
        count = log.len(),
        "Exercise log queried"
    );

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}
