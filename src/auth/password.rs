//! bcrypt password hashing. Each hash embeds its own random salt.

use crate::error::{AppError, AppResult};

/// Work factor for stored hashes.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Constant-time check of `password` against a stored bcrypt hash.
/// A hash bcrypt cannot parse is an error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Hash on the blocking pool; bcrypt at cost 10 takes tens of milliseconds.
pub async fn hash_password_blocking(password: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task: {}", e)))?
}

pub async fn verify_password_blocking(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))?
}
