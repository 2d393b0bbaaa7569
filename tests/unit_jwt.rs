use chrono::Utc;
use ems::ems_auth::{Claims, create_access_token, issue_token, verify_token};
use ems::ems_config::JwtConfig;
use ems::ems_core::{ErrorKind, Role};
use uuid::Uuid;

const SECRET: &str = "test_secret_key_for_testing_purposes";

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new(SECRET, 3600)
}

fn now() -> usize {
    Utc::now().timestamp() as usize
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    for role in Role::ALL {
        let token = create_access_token(user_id, role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role);
        assert_eq!(claims.sub, user_id.to_string());
    }
}

#[test]
fn test_expiry_uses_configured_lifetime() {
    let jwt_config = JwtConfig::new(SECRET, 120);
    let token = create_access_token(Uuid::new_v4(), Role::Employee, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();
    assert_eq!(claims.exp - claims.iat, 120);
}

#[test]
fn test_token_valid_just_before_expiry() {
    let claims = Claims::new("user", Role::Hr, now() - 3598, 3600);
    let token = issue_token(&claims, SECRET).unwrap();
    assert!(verify_token(&token, &get_test_jwt_config()).is_ok());
}

#[test]
fn test_token_rejected_just_after_expiry() {
    let claims = Claims::new("user", Role::Hr, now() - 3602, 3600);
    let token = issue_token(&claims, SECRET).unwrap();

    let err = verify_token(&token, &get_test_jwt_config()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message(), "Invalid token");
}

#[test]
fn test_token_rejected_one_second_past_expiry() {
    // exp = now - 1: past expiry with no leeway to absorb it.
    let claims = Claims::new("user", Role::Employee, now() - 3601, 3600);
    assert!(claims.exp < now());
    let token = issue_token(&claims, SECRET).unwrap();

    assert!(verify_token(&token, &get_test_jwt_config()).is_err());
}

#[test]
fn test_tampered_token_rejected() {
    let token = create_access_token(Uuid::new_v4(), Role::Employee, &get_test_jwt_config()).unwrap();
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();

    // Swap in claims signed by nobody.
    let forged = issue_token(&Claims::new("x", Role::Admin, now(), 3600), "other").unwrap();
    parts[1] = forged.split('.').nth(1).unwrap().to_string();

    assert!(verify_token(&parts.join("."), &get_test_jwt_config()).is_err());
}

#[test]
fn test_wrong_secret_rejected() {
    let token = create_access_token(Uuid::new_v4(), Role::Admin, &get_test_jwt_config()).unwrap();
    let other = JwtConfig::new("a_different_secret", 3600);
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_malformed_tokens_rejected() {
    let config = get_test_jwt_config();
    for token in ["", "abc", "a.b.c", "Bearer x.y.z"] {
        assert!(verify_token(token, &config).is_err(), "{:?} accepted", token);
    }
}
