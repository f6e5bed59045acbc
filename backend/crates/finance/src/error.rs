//! Finance Error Types
//!
//! This module provides finance-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Finance-specific result type alias
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Finance-specific error variants
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Transaction not found")]
    TransactionNotFound,

    /// Update target does not exist
    #[error("No Milestone Found")]
    MilestoneNotFound,

    #[error("No analysis data found for ID: {0}")]
    AnalysisNotFound(String),

    /// A figure that must be numeric is not
    #[error("Invalid number for {field}: '{value}'")]
    ParseError { field: &'static str, value: String },

    /// Body is not valid JSON for the endpoint
    #[error("{0}")]
    InvalidBody(String),

    /// Percentage change against a zero baseline
    #[error("Cannot compute change against a zero {field}")]
    DivisionByZero { field: &'static str },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FinanceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinanceError::TransactionNotFound
            | FinanceError::MilestoneNotFound
            | FinanceError::AnalysisNotFound(_) => ErrorKind::NotFound,
            FinanceError::ParseError { .. }
            | FinanceError::InvalidBody(_)
            | FinanceError::DivisionByZero { .. } => ErrorKind::BadRequest,
            FinanceError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            FinanceError::Database(_) | FinanceError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            FinanceError::DivisionByZero { .. } => AppError::new(self.kind(), self.to_string())
                .with_action("Store a non-zero baseline before requesting insights"),
            FinanceError::Database(_) | FinanceError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FinanceError::Database(e) => {
                tracing::error!(error = %e, "Finance database error");
            }
            FinanceError::Internal(msg) => {
                tracing::error!(message = %msg, "Finance internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Finance error");
            }
        }
    }
}

impl From<JsonRejection> for FinanceError {
    fn from(rejection: JsonRejection) -> Self {
        FinanceError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for FinanceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
