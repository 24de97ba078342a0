use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::schema::ValidationFailure;

/// Prefix of every error body returned by the user routes.
pub const ERROR_PREFIX: &str = "Error! ";

/// The primary error type for the application.
///
/// Every variant is reported to the client the same way: status 400 and a
/// JSON string `"Error! <message>"`. The variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum AppError {
    /// A candidate record broke a schema constraint.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    /// The path identifier is not a valid user id.
    #[error("Cast to UserId failed for value \"{0}\"")]
    InvalidId(String),
    /// The request body could not be read as the expected JSON shape.
    #[error("Invalid request body: {0}")]
    Body(String),
    /// The store rejected the operation or could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Anything else, e.g. a stored row that no longer decodes.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The body sent to the client.
    pub fn message(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(e) => tracing::debug!("Rejected record: {}", e),
            AppError::InvalidId(id) => tracing::debug!("Rejected user id {:?}", id),
            AppError::Body(msg) => tracing::debug!("Rejected request body: {}", msg),
            AppError::Database(e) => tracing::warn!("Database error: {}", e),
            AppError::Internal(e) => tracing::error!("Internal error: {:?}", e),
        }

        (StatusCode::BAD_REQUEST, Json(self.message())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Body(rejection.body_text())
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;
