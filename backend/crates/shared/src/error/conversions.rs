//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the HTTP rendering of [`AppError`].

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database error without consuming it
///
/// Only connectivity problems get their own kind; everything else the
/// blog store can raise is a plain server error.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 53 (insufficient resources), class 57 (operator intervention)
            Some("53000" | "53100" | "53200" | "53300" | "57P01" | "57P02" | "57P03") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::new(sqlx_error_kind(&err), "Database error").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.details() {
            Some(details) if self.is_client_error() => serde_json::json!({
                "Message": self.public_message(),
                "Details": details,
            }),
            _ => serde_json::json!({ "Message": self.public_message() }),
        };

        (status, Json(body)).into_response()
    }
}
