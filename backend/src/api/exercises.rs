//! Exercise logging API handlers

use crate::api::extract::JsonOrForm;
use crate::api::users::DeleteResponse;
use crate::api::utils::{parse_duration, parse_optional_date, validate_description, RawDuration};
use crate::error::AppError;
use crate::state::AppState;
use crate::tracker::{dates, Exercise};
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create exercise request
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// What was done
    pub description: Option<String>,
    /// Duration as a number or numeric string
    pub duration: Option<RawDuration>,
    /// Optional `YYYY-MM-DD`; defaults to today (UTC)
    pub date: Option<String>,
}

/// Exercise creation response
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    /// Owner's username
    pub username: String,
    /// What was done
    pub description: String,
    /// Validated duration
    pub duration: i64,
    /// Human-readable date, e.g. `Mon Jan 01 2024`
    pub date: String,
    /// Owner's user id
    #[serde(rename = "_id")]
    pub id: String,
}

/// POST /api/users/:id/exercises - Log an exercise for a user
///
/// Body fields are validated before the user is resolved. Resolution and
/// insert are separate statements, so a concurrent bulk delete of users can
/// leave the new exercise orphaned.
pub async fn create_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonOrForm(request): JsonOrForm<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let description = validate_description(request.description)?;
    let duration = parse_duration(request.duration)?;
    let date = parse_optional_date(request.date.as_deref(), "date")?
        .unwrap_or_else(dates::today_utc);

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(user_id.clone()))?;

    let exercise = Exercise::new(&user, description, duration, dates::to_storage(date));
    state.db.create_exercise(&exercise).await?;

    info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        date = %exercise.date,
        "Exercise created"
    );

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: dates::to_display(date),
        id: user.id,
    }))
}

/// GET /api/exercises/delete - Delete every exercise
pub async fn delete_all_exercises(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.db.delete_all_exercises().await?;

    info!(deleted, "All exercises deleted");
    Ok(Json(DeleteResponse {
        message: "All exercises have been deleted!".to_string(),
        deleted,
    }))
}
