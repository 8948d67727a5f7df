//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::token::TokenError;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Registration attempted for an email already on file
    #[error("User with this email already exists")]
    DuplicateEmail,

    /// No account for the given email
    #[error("Account not found")]
    AccountNotFound,

    /// Password mismatch at login
    #[error("Invalid credential")]
    InvalidCredential,

    /// Missing, malformed, or tampered token
    #[error("Unauthorized")]
    Unauthorized,

    /// Well-formed token past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Input shape validation failed (email format, password policy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::DuplicateEmail => StatusCode::CONFLICT,
            AccountError::AccountNotFound
            | AccountError::InvalidCredential
            | AccountError::Unauthorized
            | AccountError::TokenExpired => StatusCode::UNAUTHORIZED,
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::DuplicateEmail => ErrorKind::Conflict,
            AccountError::AccountNotFound
            | AccountError::InvalidCredential
            | AccountError::Unauthorized
            | AccountError::TokenExpired => ErrorKind::Unauthorized,
            AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError with the message that may leave the process.
    ///
    /// `AccountNotFound` and `InvalidCredential` stay distinct variants
    /// internally but share one generic message here, so the response does
    /// not disclose whether the email exists. Server errors are reduced to a
    /// generic message; detail goes to tracing only.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::AccountNotFound | AccountError::InvalidCredential => {
                AppError::unauthorized("Invalid email or password")
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::AccountNotFound | AccountError::InvalidCredential => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::TokenExpired => {
                tracing::debug!("Expired token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AccountError::TokenExpired,
            // Tampered and unparseable tokens are equally "not a credential";
            // the response never reveals which check failed.
            TokenError::InvalidSignature | TokenError::Malformed => AccountError::Unauthorized,
        }
    }
}
