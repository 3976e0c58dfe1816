//! Application Configuration
//!
//! Token settings for the identity use cases. Built once at startup and
//! shared behind an `Arc`; nothing reads these values from the environment
//! after that.

use std::env;
use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Bearer token configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 signing key
    pub signing_key: Vec<u8>,
    /// `iss` claim stamped on and required of every token
    pub issuer: String,
    /// `aud` claim stamped on and required of every token
    pub audience: String,
    /// Lifetime of an issued token
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(
        signing_key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Read `JWT_KEY`, `JWT_ISSUER`, `JWT_AUDIENCE` and optional
    /// `JWT_TTL_SECS`
    pub fn from_env() -> AppResult<Self> {
        let signing_key = required_var("JWT_KEY")?;
        let issuer = required_var("JWT_ISSUER")?;
        let audience = required_var("JWT_AUDIENCE")?;

        let ttl = match env::var("JWT_TTL_SECS") {
            Ok(secs) => Duration::from_secs(secs.trim().parse()?),
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            ttl,
            ..Self::new(signing_key.into_bytes(), issuer, audience)
        })
    }

    /// Create config with a random signing key (for development and tests)
    pub fn development() -> Self {
        use rand::RngCore;
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);
        Self::new(key.to_vec(), "blog-dev", "blog-dev-clients")
    }

    /// Token lifetime in whole seconds
    pub fn ttl_secs(&self) -> i64 {
        i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

fn required_var(name: &'static str) -> AppResult<String> {
    let value = env::var(name)
        .map_err(|e| AppError::internal(format!("{name} must be set")).with_source(e))?;
    if value.trim().is_empty() {
        return Err(AppError::internal(format!("{name} must not be empty")));
    }
    Ok(value)
}
