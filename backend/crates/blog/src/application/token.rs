//! Token Service
//!
//! Issues bearer tokens for users and reads the identity back out of them.

use std::sync::Arc;

use platform::token::{TokenCodec, now_secs};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::application::config::TokenConfig;
use crate::domain::entity::user::User;
use crate::error::{BlogError, BlogResult};

/// Claims carried by every token
///
/// `Email` and `UserName` are optional on the decode side so that a
/// correctly signed token lacking them is reported as missing claims
/// rather than as unreadable. A claim repeated in the token arrives as an
/// array; the first value wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Unique token id
    #[serde(default)]
    pub jti: String,
    #[serde(
        rename = "Email",
        default,
        deserialize_with = "first_claim",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        rename = "UserName",
        default,
        deserialize_with = "first_claim",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClaimValue {
    One(String),
    Many(Vec<String>),
}

fn first_claim<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ClaimValue>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        ClaimValue::One(value) => Some(value),
        ClaimValue::Many(values) => values.into_iter().next(),
    }))
}

/// Identity asserted by a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub email: String,
    pub user_name: String,
}

/// Bearer token issuing and reading
#[derive(Clone)]
pub struct TokenService {
    codec: TokenCodec,
    config: Arc<TokenConfig>,
}

impl TokenService {
    pub fn new(config: Arc<TokenConfig>) -> Self {
        let codec = TokenCodec::hs256(&config.signing_key, &config.issuer, &config.audience);
        Self { codec, config }
    }

    /// Claims for a fresh token, valid from now for the configured TTL
    pub fn claims_for(&self, user: &User) -> TokenClaims {
        let now = now_secs();
        TokenClaims {
            jti: Uuid::new_v4().to_string(),
            email: Some(user.email.clone()),
            user_name: Some(user.user_name.clone()),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            exp: now.saturating_add(self.config.ttl_secs()),
        }
    }

    /// Sign a token for this user
    pub fn issue(&self, user: &User) -> BlogResult<String> {
        Ok(self.codec.encode(&self.claims_for(user))?)
    }

    /// Sign arbitrary claims with the configured key
    #[cfg(test)]
    pub(crate) fn sign(&self, claims: &TokenClaims) -> BlogResult<String> {
        Ok(self.codec.encode(claims)?)
    }

    /// Verify a token and extract the `(Email, UserName)` identity
    pub fn read_identity(&self, token: Option<&str>) -> BlogResult<TokenIdentity> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(BlogError::InvalidToken("Provided token is invalid".to_string())),
        };

        let claims: TokenClaims = self.codec.decode(token)?;

        match (claims.email, claims.user_name) {
            (Some(email), Some(user_name)) if !email.is_empty() && !user_name.is_empty() => {
                Ok(TokenIdentity { email, user_name })
            }
            _ => Err(BlogError::InvalidToken(
                "Token does not contain required claims".to_string(),
            )),
        }
    }
}
