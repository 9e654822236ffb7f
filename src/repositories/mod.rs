//! Storage handles injected into services and handlers.
//!
//! The MySQL implementations delegate to [`crate::db`]; the in-memory ones back
//! tests and local runs without a database.

mod memory_repo;
mod mysql_repo;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{ContactMessage, RegisteredUser, UserRow};

pub use memory_repo::{InMemorySubmissionRepository, InMemoryUserRepository};
pub use mysql_repo::MySqlRepository;

/// Access to the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Must fail with `AppError::DuplicateUsername` without
    /// writing anything if the username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<RegisteredUser>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRow>>;
}

/// Insert-only access to the `contacts` and `feedback` tables.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn save_contact(&self, contact: &ContactMessage) -> AppResult<u64>;

    async fn save_feedback(&self, feedback_text: &str) -> AppResult<u64>;
}
