use anyhow::{Result, bail};

use crate::env_lookup;

/// Default token lifetime: one hour.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, access_token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry,
        }
    }

    /// Reads `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY` (seconds, default 3600).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env_lookup)
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = match get("JWT_SECRET") {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ => bail!("JWT_SECRET must be set to a non-empty value"),
        };

        let access_token_expiry = get("JWT_ACCESS_EXPIRY")
            .and_then(|s| s.parse().ok())
            .filter(|seconds: &i64| *seconds > 0)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY);

        Ok(Self::new(secret, access_token_expiry))
    }
}
