//! Signed Bearer Tokens
//!
//! HS256 JWT encoding and decoding over caller-defined claim types. The
//! codec knows the issuer and audience it stamps and expects; expiry is
//! taken from the `exp` claim, which is always required.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Token codec errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Claims could not be signed
    #[error("Failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// Malformed, badly signed, expired, or for another issuer/audience
    #[error("Failed to decode token: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// HS256 token codec bound to one secret, issuer and audience
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn hs256(secret: &[u8], issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact token string
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Verify a token and return its claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Decode)
    }
}

/// Seconds since the Unix epoch
pub fn now_secs() -> i64 {
    i64::try_from(jsonwebtoken::get_current_timestamp()).unwrap_or(i64::MAX)
}
