//! JWT creation and verification.
//!
//! Verification checks the HS256 signature and the `exp` claim with zero
//! leeway: a token is rejected once the current time is past `exp`.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use ems_config::JwtConfig;
use ems_core::{AppError, Role};

use crate::claims::Claims;

/// Signs an arbitrary claim set with `secret`.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Creates an access token for `user_id` that expires after the configured
/// access-token lifetime.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let ttl = jwt_config.access_token_expiry.max(0) as usize;
    let claims = Claims::issued_now(user_id.to_string(), role, ttl);
    issue_token(&claims, &jwt_config.secret)
}

/// Verifies a token and returns its claims.
///
/// Bad signatures, malformed tokens, unknown roles, and expired tokens all
/// fail the same way, with an unauthorized `"Invalid token"` error.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ems_core::ErrorKind;

    fn config() -> JwtConfig {
        JwtConfig::new("unit-test-secret", 3600)
    }

    #[test]
    fn test_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, Role::Manager, &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_access_token(Uuid::new_v4(), Role::Admin, &config()).unwrap();
        let other = JwtConfig::new("another-secret", 3600);

        let err = verify_token(&token, &other).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message(), "Invalid token");
    }

    #[test]
    fn test_garbage_rejected() {
        let err = verify_token("not.a.token", &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_rejected_without_leeway() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims::new("user", Role::Employee, now - 120, 60);
        let token = issue_token(&claims, "unit-test-secret").unwrap();

        assert!(verify_token(&token, &config()).is_err());
    }

    #[test]
    fn test_alg_none_rejected() {
        // {"alg":"none","typ":"JWT"} . {"sub":"x","role":"admin","iat":1,"exp":9999999999} .
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
                     eyJzdWIiOiJ4Iiwicm9sZSI6ImFkbWluIiwiaWF0IjoxLCJleHAiOjk5OTk5OTk5OTl9.";
        assert!(verify_token(token, &config()).is_err());
    }
}
