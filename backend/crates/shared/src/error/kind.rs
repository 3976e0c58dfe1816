//! Error Kind
//!
//! The closed set of outcomes a failed request can have, each tied to one
//! HTTP status.

use std::fmt;

/// Error classification shared by every domain crate
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert!(ErrorKind::ServiceUnavailable.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid operation: bad token, unknown login, failed validation
    BadRequest,
    /// No bearer credential on the request
    Unauthorized,
    NotFound,
    /// Anything unclassified
    InternalServerError,
    /// Store unreachable or out of connections
    ServiceUnavailable,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Messages of server errors never reach the client
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError | Self::ServiceUnavailable)
    }

    pub const fn is_client_error(self) -> bool {
        !self.is_server_error()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not found",
            Self::InternalServerError => "internal error",
            Self::ServiceUnavailable => "unavailable",
        };
        f.write_str(label)
    }
}
