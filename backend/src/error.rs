//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting:
//! every failure body carries a human-readable `message` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing or a field value is malformed
    #[error("{0}")]
    Validation(String),

    /// The referenced user does not exist
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A storage query or connection failed
    ///
    /// Only `context` is shown to clients; `source` is logged server-side.
    #[error("{context}")]
    Storage {
        /// Generic, client-safe description of the failed operation
        context: &'static str,
        /// Underlying database error
        #[source]
        source: sqlx::Error,
    },

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Build a `Storage` error mapper for use with `map_err`
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Storage { context, source }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, "{}", context);
            }
            AppError::Internal(e) => tracing::error!(error = ?e, "Internal error"),
            _ => tracing::warn!(status = status.as_u16(), "{}", self),
        }

        let body = Json(json!({
            "message": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
