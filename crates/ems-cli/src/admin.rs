//! Admin bootstrap.
//!
//! Signup never grants a role the caller did not ask for, so the first admin
//! account is usually created here.

use anyhow::{Context, Result, anyhow, bail};
use sqlx::PgPool;
use validator::Validate;

use ems_core::{AppError, Role, hash_password};
use ems_db::is_unique_violation;
use ems_models::{SignupRequest, UserId};

/// Creates an account with the `admin` role.
///
/// Input goes through the same rules as a signup.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<UserId> {
    let request = SignupRequest {
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Some(Role::Admin.to_string()),
    };

    if let Err(errors) = request.validate() {
        let details = AppError::from_validation(&errors)
            .field_errors
            .into_iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Invalid admin details ({})", details);
    }

    let hashed_password = hash_password(password).map_err(|e| anyhow!(e.message()))?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        r#"INSERT INTO users (name, username, email, password, role)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING id"#,
    )
    .bind(&request.name)
    .bind(&request.username)
    .bind(&request.email)
    .bind(&hashed_password)
    .bind(Role::Admin)
    .fetch_one(db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            return anyhow!("A user with this email or username already exists");
        }
        anyhow::Error::new(e)
    })
    .context("Failed to create admin")?;

    Ok(user_id)
}
