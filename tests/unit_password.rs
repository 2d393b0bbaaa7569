use ems::ems_core::{hash_password, hash_password_blocking, verify_password};

#[test]
fn test_hash_is_not_plaintext() {
    let hash = hash_password("secret1").unwrap();
    assert_ne!(hash, "secret1");
    assert!(!hash.contains("secret1"));
}

#[test]
fn test_hash_is_salted() {
    let first = hash_password("secret1").unwrap();
    let second = hash_password("secret1").unwrap();
    assert_ne!(first, second);
    assert!(verify_password("secret1", &first).unwrap());
    assert!(verify_password("secret1", &second).unwrap());
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = hash_password("secret1").unwrap();
    assert!(!verify_password("Secret1", &hash).unwrap());
    assert!(!verify_password("", &hash).unwrap());
}

#[test]
fn test_verify_errors_on_non_bcrypt_digest() {
    assert!(verify_password("secret1", "plaintext-not-a-hash").is_err());
}

#[test]
fn test_unicode_password() {
    let hash = hash_password("пароль-密码").unwrap();
    assert!(verify_password("пароль-密码", &hash).unwrap());
}

#[tokio::test]
async fn test_blocking_hash_verifies() {
    let hash = hash_password_blocking("secret1".to_string()).await.unwrap();
    assert!(verify_password("secret1", &hash).unwrap());
}
