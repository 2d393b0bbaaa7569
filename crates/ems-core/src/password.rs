//! Password hashing with bcrypt.
//!
//! Secrets are stored as salted bcrypt digests with a fixed work factor.
//! Plaintext never leaves this module in stored form.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor used for every stored secret.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch. Only a digest that is not bcrypt at all is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

/// Hashes on tokio's blocking pool so request tasks keep running.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Verifies on tokio's blocking pool.
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?
}
