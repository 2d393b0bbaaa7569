use anyhow::Result;
use sqlx::PgPool;

use ems_config::{CorsConfig, DatabaseConfig, JwtConfig};
use ems_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
        }
    }
}

/// Reads configuration from the environment and connects the pool.
pub async fn init_app_state() -> Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;
    let db = init_db_pool(&db_config).await?;

    Ok(AppState::new(db, jwt_config, CorsConfig::from_env()))
}
