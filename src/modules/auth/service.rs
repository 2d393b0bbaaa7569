use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use ems_auth::create_access_token;
use ems_config::JwtConfig;
use ems_core::{AppError, hash_password_blocking, verify_password_blocking};
use ems_db::is_unique_violation;
use ems_models::{LoginRequest, SignupRequest, UserCredentials, UserId};

use crate::metrics::{
    track_jwt_issued, track_user_created, track_user_login_failure, track_user_login_success,
};

pub const DUPLICATE_USER: &str = "User with this email or username already exists.";

pub struct AuthService;

impl AuthService {
    /// Registers a new account and returns its id.
    ///
    /// An existing account with the same email or username is a conflict.
    #[instrument(skip(db, dto), fields(email = %dto.email, username = %dto.username))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<UserId, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR username = $2)",
        )
        .bind(&dto.email)
        .bind(&dto.username)
        .fetch_one(db)
        .await
        .context("Error checking existing users")?;

        if exists {
            return Err(AppError::conflict(anyhow!(DUPLICATE_USER)));
        }

        Self::create_user(db, dto).await
    }

    /// Hashes the password and inserts the account without the pre-check.
    ///
    /// A concurrent signup that already took the email or username surfaces
    /// as a unique violation and is reported as the same conflict.
    #[instrument(skip(db, dto), fields(email = %dto.email, username = %dto.username))]
    pub async fn create_user(db: &PgPool, dto: SignupRequest) -> Result<UserId, AppError> {
        let role = dto.role();
        let hashed_password = hash_password_blocking(dto.password).await?;

        let user_id = sqlx::query_scalar::<_, UserId>(
            r#"INSERT INTO users (name, username, email, password, role)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(&dto.name)
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::conflict(anyhow!(DUPLICATE_USER));
            }
            AppError::internal(anyhow::Error::new(e).context("Error creating user"))
        })?;

        track_user_created(role.as_str());
        tracing::info!(user_id = %user_id, role = %role, "user registered");

        Ok(user_id)
    }

    /// Checks credentials and issues an access token.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, role, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Error logging in")?;

        let Some(credentials) = credentials else {
            track_user_login_failure("user_not_found");
            return Err(AppError::unauthorized("User Not Found"));
        };

        let is_valid = verify_password_blocking(dto.password, credentials.password).await?;
        if !is_valid {
            track_user_login_failure("invalid_password");
            return Err(AppError::unauthorized("Invalid password"));
        }

        let token = create_access_token(credentials.id.into_inner(), credentials.role, jwt_config)?;

        track_jwt_issued();
        track_user_login_success(credentials.role.as_str());

        Ok(token)
    }
}
