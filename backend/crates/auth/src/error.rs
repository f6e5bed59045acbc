//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

use crate::domain::value_object::phone_number::PhoneNumberError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Phone is registered and the password does not match
    #[error("Invalid password")]
    InvalidPassword,

    /// No bearer credential on a protected request
    #[error("Missing Authorization header")]
    MissingAuthorization,

    /// Bad signature, malformed, expired, or unknown issuer
    #[error("Invalid or expired JWT token")]
    InvalidToken,

    /// Token subject does not resolve to a stored user
    #[error("User not found")]
    UserNotFound,

    /// Rejected registration input
    #[error("{0}")]
    Validation(String),

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
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidPassword
            | AuthError::MissingAuthorization
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; the client sees a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::MissingAuthorization => AppError::new(self.kind(), self.to_string())
                .with_action("Send 'Authorization: Bearer <token>'"),
            AuthError::InvalidToken => AppError::new(self.kind(), self.to_string())
                .with_action("Register or log in again to obtain a new token"),
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
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
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Login attempt with wrong password");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid or expired token");
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
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<BearerError> for AuthError {
    fn from(_: BearerError) -> Self {
        AuthError::MissingAuthorization
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::InvalidToken => AuthError::InvalidToken,
            TokenError::Encoding(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<PhoneNumberError> for AuthError {
    fn from(err: PhoneNumberError) -> Self {
        AuthError::Validation(err.to_string())
    }
}
