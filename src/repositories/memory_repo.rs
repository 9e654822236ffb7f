//! In-memory repositories with the same uniqueness semantics as the MySQL schema.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{ContactMessage, RegisteredUser, UserRow};

use super::{SubmissionRepository, UserRepository};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<UserRow>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored row, hashes included.
    pub async fn rows(&self) -> Vec<UserRow> {
        self.users.lock().await.clone()
    }

    /// Number of storage calls (inserts and lookups) served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<RegisteredUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Check and insert under one lock, like the unique index does.
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUsername);
        }
        let id = users.len() as i64 + 1;
        users.push(UserRow {
            id,
            username: username.to_string(),
            password: password_hash.to_string(),
            created_at: Utc::now(),
        });
        Ok(RegisteredUser {
            id,
            username: username.to_string(),
        })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySubmissionRepository {
    contacts: Arc<Mutex<Vec<ContactMessage>>>,
    feedback: Arc<Mutex<Vec<String>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contacts(&self) -> Vec<ContactMessage> {
        self.contacts.lock().await.clone()
    }

    pub async fn feedback(&self) -> Vec<String> {
        self.feedback.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn save_contact(&self, contact: &ContactMessage) -> AppResult<u64> {
        let mut contacts = self.contacts.lock().await;
        contacts.push(contact.clone());
        Ok(contacts.len() as u64)
    }

    async fn save_feedback(&self, feedback_text: &str) -> AppResult<u64> {
        let mut feedback = self.feedback.lock().await;
        feedback.push(feedback_text.to_string());
        Ok(feedback.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_username_leaves_storage_untouched() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create("alice", "hash-1").await.unwrap();
        assert_eq!(first.id, 1);

        let err = repo.create("alice", "hash-2").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));

        let rows = repo.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].password, "hash-1");
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice", "h").await.unwrap();
        repo.create("Alice", "h").await.unwrap();
        assert!(repo.find_by_username("ALICE").await.unwrap().is_none());
        assert_eq!(repo.find_by_username("Alice").await.unwrap().unwrap().id, 2);
    }
}
