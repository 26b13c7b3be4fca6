use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roles_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "detail": "..." }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roles_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body is not valid JSON for the expected shape.
    #[error("{0}")]
    Payload(String),

    /// A path parameter could not be parsed.
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// The request body could not be read at all (e.g. over the size limit).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Payload(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),

            AppError::Path(rejection) => (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),

            AppError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
