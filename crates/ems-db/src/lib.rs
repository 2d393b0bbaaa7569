//! # EMS DB
//!
//! Database pool and migrations for the EMS API.
//!
//! The pool is built once at startup from [`DatabaseConfig`] and handed to
//! the application state; nothing in the workspace keeps a global connection.
//!
//! # Example
//!
//! ```ignore
//! use ems_config::DatabaseConfig;
//! use ems_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use ems_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool.
///
/// The returned pool is cheaply cloneable and should be shared through the
/// application state.
///
/// # Errors
///
/// Fails if the connection string is invalid or the server is unreachable.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );

    Ok(pool)
}

/// Applies the SQL migrations shipped in the repository's `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("database migrations applied");
    Ok(())
}

/// True when the error is a PostgreSQL unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
