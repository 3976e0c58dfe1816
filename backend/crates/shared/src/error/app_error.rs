//! Application Error
//!
//! [`AppError`] is what every domain error becomes at the HTTP boundary,
//! and what startup code returns through [`AppResult`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Message shown to clients for every 5xx error
pub const GENERIC_SERVER_MESSAGE: &str = "An unexpected error occurred.";

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Classified error with a client-facing message
///
/// `message` and `details` are rendered as given for 4xx kinds. For 5xx
/// kinds only [`GENERIC_SERVER_MESSAGE`] is rendered; `source` is for logs.
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "Invalid request data.")
///     .with_details("expected value at line 1 column 1");
/// assert_eq!(err.public_message(), "Invalid request data.");
///
/// let err = AppError::internal("pool closed");
/// assert_eq!(err.public_message(), "An unexpected error occurred.");
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    details: Option<Cow<'static, str>>,
    source: Option<BoxedSource>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn with_details(mut self, details: impl Into<Cow<'static, str>>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Full message, including for server errors
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Message that may go into a response body
    pub fn public_message(&self) -> &str {
        if self.kind.is_server_error() {
            GENERIC_SERVER_MESSAGE
        } else {
            &self.message
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({}): {}", self.message, self.kind, details),
            None => write!(f, "{} ({})", self.message, self.kind),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
