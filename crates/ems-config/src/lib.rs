//! # EMS Config
//!
//! Configuration types for the EMS API.
//!
//! Every structure is loaded from environment variables (a `.env` file is
//! read by the binaries through `dotenvy` before any of these run):
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listening address
//! - [`cors`]: allowed browser origins
//!
//! Each type also has a `from_vars` constructor taking a lookup closure, which
//! is what the tests use instead of mutating the process environment.
//!
//! # Example
//!
//! ```ignore
//! use ems_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
