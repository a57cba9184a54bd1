//! Push Error Types
//!
//! This module provides push-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Push-specific result type alias
pub type PushResult<T> = Result<T, PushError>;

/// Push-specific error variants
#[derive(Debug, Error)]
pub enum PushError {
    /// Provider name is not supported
    #[error("Unknown push provider: {0}")]
    UnknownProvider(String),

    /// Token is already registered
    #[error("Push token already registered")]
    TokenConflict,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PushError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PushError::UnknownProvider(_) => StatusCode::BAD_REQUEST,
            PushError::TokenConflict => StatusCode::CONFLICT,
            PushError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PushError::UnknownProvider(_) => ErrorKind::BadRequest,
            PushError::TokenConflict => ErrorKind::Conflict,
            PushError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PushError::Database(_) => AppError::internal("Internal server error"),
            PushError::UnknownProvider(_) => {
                AppError::new(self.kind(), self.to_string()).with_action("Use provider \"fcm\"")
            }
            PushError::TokenConflict => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PushError::Database(e) => {
                tracing::error!(error = %e, "Push database error");
            }
            _ => {
                tracing::debug!(error = %self, "Push error");
            }
        }
    }
}

impl IntoResponse for PushError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
