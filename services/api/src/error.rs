//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Typed errors surfaced by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A unique constraint was violated
    #[error("{0}")]
    Duplicate(String),

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A non-database failure inside a repository operation
    #[error("{0}")]
    Unexpected(String),
}

impl RepositoryError {
    /// Classify a sqlx error, turning unique-constraint violations into
    /// `Duplicate` carrying the given message
    pub fn from_sqlx(err: sqlx::Error, duplicate_message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::Duplicate(duplicate_message.to_string())
            }
            _ => RepositoryError::Database(err),
        }
    }
}

/// Type alias for repository results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field is missing or malformed; raised before any
    /// database access
    #[error("{0}")]
    Validation(String),

    /// Lookup miss
    #[error("{0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Error propagated from a repository operation
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Repository(RepositoryError::Duplicate(msg)) => (StatusCode::CONFLICT, msg),
            ApiError::Repository(RepositoryError::Database(e)) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
            ApiError::Repository(RepositoryError::Unexpected(msg)) => {
                error!("Unexpected repository error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
