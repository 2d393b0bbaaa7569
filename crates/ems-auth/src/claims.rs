//! Access-token claim set.

use chrono::Utc;
use ems_core::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in access tokens.
///
/// `sub` is the user id as a string, `role` the user's role at login time.
/// Role changes take effect on the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub role: Role,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    pub exp: usize,
}

impl Claims {
    /// Builds claims issued at `issued_at` that expire `ttl_secs` later.
    pub fn new(sub: impl Into<String>, role: Role, issued_at: usize, ttl_secs: usize) -> Self {
        Self {
            sub: sub.into(),
            role,
            iat: issued_at,
            exp: issued_at + ttl_secs,
        }
    }

    /// Claims issued now.
    pub fn issued_now(sub: impl Into<String>, role: Role, ttl_secs: usize) -> Self {
        Self::new(sub, role, Utc::now().timestamp() as usize, ttl_secs)
    }
}
