//! Bearer Header Parsing
//!
//! Extracts the credential from an `Authorization: Bearer <token>` header.

use http::{HeaderMap, header};

/// Scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from request headers
///
/// Returns `None` when the header is absent, not valid ASCII, or uses
/// another scheme. The token itself is trimmed but otherwise untouched, so
/// `"Bearer "` yields `Some("")` and is left for the token decoder to reject.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?;
    Some(token.trim().to_string())
}
