mod common;

use axum::http::StatusCode;
use common::{
    create_test_user, field_messages, generate_unique_email, generate_unique_username, send,
    setup_test_app,
};
use ems::ems_core::{Role, verify_password};
use serde_json::json;
use sqlx::PgPool;

fn signup_body(email: &str, username: &str) -> serde_json::Value {
    json!({
        "name": "Alice",
        "username": username,
        "email": email,
        "password": "secret1"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_login_profile_flow(pool: PgPool) {
    let email = generate_unique_email();
    let username = generate_unique_username();

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/v1/user/signup",
        None,
        Some(signup_body(&email, &username)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert!(body["user_id"].is_string());
    assert!(body.get("password").is_none());

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/v1/user/login",
        None,
        Some(json!({"email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login Successful");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        "/api/v1/user/profile",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], email);
    assert_eq!(body["username"], username);
    assert_eq!(body["role"], "employee");
    assert!(body.get("password").is_none());

    let (status, body) = send(setup_test_app(pool), "GET", "/api/v1/user/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No token provided");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_stores_hash_not_plaintext(pool: PgPool) {
    let email = generate_unique_email();
    let (status, _) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/v1/user/signup",
        None,
        Some(signup_body(&email, &generate_unique_username())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_ne!(stored, "secret1");
    assert!(verify_password("secret1", &stored).unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_with_explicit_role(pool: PgPool) {
    let email = generate_unique_email();
    let mut body = signup_body(&email, &generate_unique_username());
    body["role"] = json!("hr");

    let (status, _) = send(setup_test_app(pool.clone()), "POST", "/api/v1/user/signup", None, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let role: Role = sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, Role::Hr);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_rejects_unknown_role(pool: PgPool) {
    let mut body = signup_body(&generate_unique_email(), &generate_unique_username());
    body["role"] = json!("superuser");

    let (status, body) = send(setup_test_app(pool), "POST", "/api/v1/user/signup", None, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_messages(&body, "role"), vec!["Invalid role"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email_or_username(pool: PgPool) {
    let existing = create_test_user(&pool, Role::Employee).await;

    let same_email = signup_body(&existing.email, &generate_unique_username());
    let (status, body) = send(setup_test_app(pool.clone()), "POST", "/api/v1/user/signup", None, Some(same_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User with this email or username already exists.");

    let same_username = signup_body(&generate_unique_email(), &existing.username);
    let (status, body) = send(setup_test_app(pool), "POST", "/api/v1/user/signup", None, Some(same_username)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User with this email or username already exists.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_validation_messages(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool),
        "POST",
        "/api/v1/user/signup",
        None,
        Some(json!({"email": "nope", "password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(field_messages(&body, "name"), vec!["Name is required."]);
    assert_eq!(field_messages(&body, "username"), vec!["Username is required."]);
    assert_eq!(field_messages(&body, "email"), vec!["Valid email is required."]);
    assert_eq!(
        field_messages(&body, "password"),
        vec!["Password must be at least 6 characters long."]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool),
        "POST",
        "/api/v1/user/login",
        None,
        Some(json!({"email": "nobody@test.com", "password": "whatever"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "User Not Found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let user = create_test_user(&pool, Role::Employee).await;

    let (status, body) = send(
        setup_test_app(pool),
        "POST",
        "/api/v1/user/login",
        None,
        Some(json!({"email": user.email, "password": "not-the-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid password");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_validation(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool),
        "POST",
        "/api/v1/user/login",
        None,
        Some(json!({"email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_messages(&body, "email"), vec!["Valid email is required."]);
    assert_eq!(field_messages(&body, "password"), vec!["Password is required."]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_of_deleted_user_is_not_found(pool: PgPool) {
    let user = create_test_user(&pool, Role::Employee).await;
    let token = common::token_for(&user);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send(setup_test_app(pool), "GET", "/api/v1/user/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bare_token_accepted(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let user = create_test_user(&pool, Role::Manager).await;
    let token = common::token_for(&user);

    let request = Request::builder()
        .uri("/api/v1/user/profile")
        .header("authorization", token)
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_content_type(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/user/login")
        .body(Body::from(r#"{"email":"a@b.com","password":"x"}"#))
        .unwrap();
    let response = setup_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_rejects_text_the_store_cannot_hold(pool: PgPool) {
    let mut overlong = signup_body(&generate_unique_email(), &generate_unique_username());
    overlong["name"] = json!("a".repeat(300));

    let (status, body) = send(setup_test_app(pool.clone()), "POST", "/api/v1/user/signup", None, Some(overlong)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_messages(&body, "name"), vec!["Must be at most 255 characters long."]);

    let mut with_nul = signup_body(&generate_unique_email(), &generate_unique_username());
    with_nul["name"] = json!("a\0b");

    let (status, body) = send(setup_test_app(pool.clone()), "POST", "/api/v1/user/signup", None, Some(with_nul)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_messages(&body, "name"), vec!["Must not contain NUL characters."]);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_with_nul_email_is_validation_error(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool),
        "POST",
        "/api/v1/user/login",
        None,
        Some(json!({"email": "a\0@test.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        field_messages(&body, "email").contains(&"Must not contain NUL characters.".to_string())
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_racing_an_existing_account_is_conflict(pool: PgPool) {
    use ems::ems_core::ErrorKind;
    use ems::ems_models::SignupRequest;
    use ems::modules::auth::service::AuthService;

    let existing = create_test_user(&pool, Role::Employee).await;

    // Skips the existence check, as a second request would after both passed it.
    let request = SignupRequest {
        name: "Late".to_string(),
        username: generate_unique_username(),
        email: existing.email.clone(),
        password: "secret1".to_string(),
        role: None,
    };
    let err = AuthService::create_user(&pool, request).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "User with this email or username already exists.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_signups_create_one_account(pool: PgPool) {
    let email = generate_unique_email();
    let username = generate_unique_username();

    let first = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/v1/user/signup",
        None,
        Some(signup_body(&email, &username)),
    );
    let second = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/v1/user/signup",
        None,
        Some(signup_body(&email, &username)),
    );
    let ((first_status, _), (second_status, _)) = tokio::join!(first, second);

    let mut statuses = [first_status.as_u16(), second_status.as_u16()];
    statuses.sort();
    assert_eq!(statuses, [201, 400]);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
