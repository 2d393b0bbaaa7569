//! # EMS Auth
//!
//! Access-token claims and JWT utilities for the EMS API.
//!
//! - [`claims`]: the claim set embedded in every access token
//! - [`jwt`]: token creation and verification
//!
//! Tokens are HS256-signed with the configured secret and carry the user id
//! and role, so authorization decisions never need a database lookup.
//!
//! # Example
//!
//! ```ignore
//! use ems_auth::{create_access_token, verify_token};
//! use ems_config::JwtConfig;
//! use ems_core::Role;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(user_id, Role::Hr, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, Role::Hr);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, issue_token, verify_token};
