use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use ems_core::{AppError, hash_password_blocking};
use ems_db::is_unique_violation;
use ems_models::{UpdateUserDto, User, UserId};

use crate::modules::auth::service::DUPLICATE_USER;

const USER_COLUMNS: &str = "id, name, username, email, role, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Error fetching users")?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Error fetching user")?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// Applies the fields present in `dto`. A new password is hashed first.
    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: UserId, dto: UpdateUserDto) -> Result<User, AppError> {
        let role = dto.role();
        let password = match dto.password {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        sqlx::query_as::<_, User>(&format!(
            r#"UPDATE users
               SET name = COALESCE($2, name),
                   username = COALESCE($3, username),
                   email = COALESCE($4, email),
                   role = COALESCE($5, role),
                   password = COALESCE($6, password),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(role)
        .bind(&password)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::conflict(anyhow!(DUPLICATE_USER));
            }
            AppError::internal(anyhow::Error::new(e).context("Error updating user"))
        })?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: UserId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Error deleting user")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        Ok(())
    }
}
