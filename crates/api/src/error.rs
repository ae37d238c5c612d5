use alliswell_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers and workflow operations.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `alliswell_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::NoPreviousStatus { .. } => (
                    StatusCode::NOT_FOUND,
                    "NO_PREVIOUS_STATUS",
                    "No previous status found".to_string(),
                ),
                CoreError::NoOperationsForMonth { .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Operations data not found for this month".to_string(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on user-chosen keys map to 409.
/// - Foreign-key and CHECK violations map to 400.
/// - Everything else, including a unique violation on the weekly status
///   key, maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => match conflict_message(db_err.message()) {
                Some(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.to_string()),
                None => {
                    // (project, week) collisions are resolved inside the upsert statement.
                    tracing::error!(error = %db_err, "Unexpected unique violation");
                    internal()
                }
            },
            ErrorKind::ForeignKeyViolation => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Referenced record does not exist".to_string(),
            ),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Value rejected by a storage constraint".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// User-facing message for a unique violation, keyed by the `table.column`
/// SQLite reports. `None` for keys that must never collide.
fn conflict_message(db_message: &str) -> Option<&'static str> {
    if db_message.contains("projects.name") {
        Some("A project with this name already exists")
    } else if db_message.contains("users.email") {
        Some("A user with this email already exists")
    } else {
        None
    }
}
