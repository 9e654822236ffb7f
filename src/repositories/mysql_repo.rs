//! MySQL-backed repository over the shared connection pool.

use async_trait::async_trait;

use crate::db::{self, DbPool};
use crate::error::AppResult;
use crate::models::{ContactMessage, RegisteredUser, UserRow};

use super::{SubmissionRepository, UserRepository};

#[derive(Clone)]
pub struct MySqlRepository {
    pool: DbPool,
}

impl MySqlRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for MySqlRepository {
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<RegisteredUser> {
        db::user_create(&self.pool, username, password_hash).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRow>> {
        db::user_find_by_username(&self.pool, username).await
    }
}

#[async_trait]
impl SubmissionRepository for MySqlRepository {
    async fn save_contact(&self, contact: &ContactMessage) -> AppResult<u64> {
        db::contact_create(&self.pool, contact).await
    }

    async fn save_feedback(&self, feedback_text: &str) -> AppResult<u64> {
        db::feedback_create(&self.pool, feedback_text).await
    }
}
