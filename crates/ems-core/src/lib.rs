//! # EMS Core
//!
//! Core types, errors, and utilities for the EMS API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`password`]: Salted password hashing and verification
//! - [`roles`]: The closed set of user roles
//!
//! # Example
//!
//! ```ignore
//! use ems_core::{AppError, Role, hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Employee not found"));
//!
//! let hash = hash_password("secret1")?;
//! assert!(verify_password("secret1", &hash)?);
//!
//! let role: Role = "hr".parse()?;
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, ErrorResponse, FieldError};
pub use password::{
    HASH_COST, hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};
pub use roles::Role;
