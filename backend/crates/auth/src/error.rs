//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::WWW_AUTHENTICATE_BEARER;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// User exists but has no local password
    #[error("User cannot log in with a password")]
    NotLocalUser,

    /// User is deactivated
    #[error("User is deactivated")]
    UserDeactivated,

    /// Access or refresh token not found or expired
    #[error("Token is invalid or expired")]
    TokenInvalid,

    /// Authorization header missing or not a bearer token
    #[error("Missing or malformed bearer token")]
    MissingCredentials,

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::NotLocalUser | AuthError::UserDeactivated => StatusCode::FORBIDDEN,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::MissingCredentials => ErrorKind::Unauthorized,
            AuthError::NotLocalUser | AuthError::UserDeactivated => ErrorKind::Forbidden,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are reported with a generic message; the detail
    /// only goes to the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            AuthError::MissingCredentials | AuthError::TokenInvalid => {
                AppError::new(self.kind(), self.to_string())
                    .with_action("Log in again to obtain a new access token")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Auth password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::UserDeactivated => {
                tracing::warn!("Request from deactivated user");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = self.status_code() == StatusCode::UNAUTHORIZED;
        let mut response = self.to_app_error().into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(WWW_AUTHENTICATE_BEARER),
            );
        }
        response
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::NotLocalUser.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::UserDeactivated.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let response = AuthError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_forbidden_response_has_no_challenge() {
        let response = AuthError::UserDeactivated.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let err = AuthError::Database(sqlx::Error::Protocol("secret detail".into()));
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("secret"));
    }
}
