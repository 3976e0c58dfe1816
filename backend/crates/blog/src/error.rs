//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Variants fall into three families:
//! not-found (404), invalid-operation (400) and unclassified (500), plus
//! the 401 raised when a request carries no bearer credential at all.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::sqlx_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
///
/// The display text of every 4xx variant is the message the client sees.
#[derive(Debug, Error)]
pub enum BlogError {
    // ------------------------------------------------------------------
    // Not found (404)
    // ------------------------------------------------------------------
    #[error("{0}")]
    ArticleNotFound(String),

    #[error("{0}")]
    CommentNotFound(String),

    #[error("{0}")]
    UserNotFound(String),

    // ------------------------------------------------------------------
    // Invalid operation (400)
    // ------------------------------------------------------------------
    /// Token empty, undecodable, or missing identity claims
    #[error("{0}")]
    InvalidToken(String),

    /// Login with unknown email/password pair
    #[error("{0}")]
    NotRegistered(String),

    #[error("{0}")]
    InvalidOperation(String),

    /// Input DTO failed its validation rules
    #[error("{0}")]
    Validation(String),

    /// Request body could not be parsed
    #[error("Invalid request data.")]
    MalformedRequest(String),

    // ------------------------------------------------------------------
    // Credentials absent (401)
    // ------------------------------------------------------------------
    #[error("Missing or malformed Authorization header")]
    Unauthorized,

    // ------------------------------------------------------------------
    // Unclassified (5xx)
    // ------------------------------------------------------------------
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::ArticleNotFound(_)
            | BlogError::CommentNotFound(_)
            | BlogError::UserNotFound(_) => ErrorKind::NotFound,
            BlogError::InvalidToken(_)
            | BlogError::NotRegistered(_)
            | BlogError::InvalidOperation(_)
            | BlogError::Validation(_)
            | BlogError::MalformedRequest(_) => ErrorKind::BadRequest,
            BlogError::Unauthorized => ErrorKind::Unauthorized,
            // A missing row is never a client 404 here; use cases check
            // existence themselves.
            BlogError::Database(e) => match sqlx_error_kind(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            BlogError::MalformedRequest(details) => err.with_details(details.clone()),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::NotRegistered(_) => {
                tracing::warn!("Login attempt with unknown credentials");
            }
            BlogError::InvalidToken(msg) => {
                tracing::warn!(reason = %msg, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::token::TokenError> for BlogError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Decode(_) => {
                BlogError::InvalidToken("Token cannot be read".to_string())
            }
            platform::token::TokenError::Encode(e) => {
                BlogError::Internal(format!("Failed to sign token: {e}"))
            }
        }
    }
}
