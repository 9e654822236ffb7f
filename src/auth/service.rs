//! Auth application service: register and login against an injected user store.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::auth::password::{hash_password_blocking, verify_password_blocking, HASH_COST};
use crate::config::DEFAULT_REDIRECT_URL;
use crate::error::{AppError, AppResult};
use crate::models::{AuthenticatedUser, RegisteredUser};
use crate::repositories::UserRepository;

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Result of a successful login: the user plus where the client should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub user: AuthenticatedUser,
    pub redirect_url: String,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    cost: u32,
    redirect_url: String,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            cost: HASH_COST,
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
        }
    }

    /// Override the bcrypt cost. Production code keeps [`HASH_COST`].
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = url.into();
        self
    }

    /// Hash the password and insert the user. Duplicates are detected by the
    /// store's unique constraint, not by a lookup first.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<RegisteredUser> {
        require_credentials(username, password)?;

        let hash = hash_password_blocking(password.to_string(), self.cost).await?;
        let user = match self.users.create(username, &hash).await {
            Ok(u) => u,
            Err(AppError::DuplicateUsername) => {
                warn!(username = %username, "username already registered");
                return Err(AppError::DuplicateUsername);
            }
            Err(e) => return Err(e),
        };

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginSuccess> {
        require_credentials(username, password)?;

        let row = match self.users.find_by_username(username).await? {
            Some(row) => row,
            None => {
                debug!(username = %username, "login for unknown user");
                return Err(AppError::UserNotFound);
            }
        };

        if !verify_password_blocking(password.to_string(), row.password.clone()).await? {
            warn!(user_id = row.id, "login invalid password");
            return Err(AppError::InvalidPassword);
        }

        info!(user_id = row.id, username = %row.username, "user logged in");
        Ok(LoginSuccess {
            user: row.into(),
            redirect_url: self.redirect_url.clone(),
        })
    }
}

fn require_credentials(username: &str, password: &str) -> AppResult<()> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;

    fn service() -> (AuthService, InMemoryUserRepository) {
        let repo = InMemoryUserRepository::new();
        let service = AuthService::new(Arc::new(repo.clone())).with_cost(4);
        (service, repo)
    }

    #[tokio::test]
    async fn register_then_login() {
        let (auth, _) = service();
        let user = auth.register("alice", "secret1").await.unwrap();
        assert_eq!(user.username, "alice");

        let ok = auth.login("alice", "secret1").await.unwrap();
        assert_eq!(ok.user.id, user.id);
        assert_eq!(ok.user.username, "alice");
        assert_eq!(ok.redirect_url, "/home.html");
    }

    #[tokio::test]
    async fn second_registration_is_a_duplicate() {
        let (auth, repo) = service();
        auth.register("alice", "secret1").await.unwrap();
        let err = auth.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));

        // The first password still works.
        assert!(auth.login("alice", "secret1").await.is_ok());
        assert_eq!(repo.rows().await.len(), 1);
    }

    #[tokio::test]
    async fn stored_hash_is_never_the_plaintext() {
        let (auth, repo) = service();
        auth.register("alice", "same-password").await.unwrap();
        auth.register("bob", "same-password").await.unwrap();

        let rows = repo.rows().await;
        assert!(rows.iter().all(|r| r.password != "same-password"));
        assert_ne!(rows[0].password, rows[1].password);
    }

    #[tokio::test]
    async fn login_failures_are_distinguished() {
        let (auth, _) = service();
        auth.register("alice", "secret1").await.unwrap();

        let err = auth.login("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPassword));

        let err = auth.login("bob", "x").await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound));
    }

    #[tokio::test]
    async fn empty_fields_fail_before_storage() {
        let (auth, repo) = service();
        for (u, p) in [("", "pw"), ("alice", ""), ("", "")] {
            assert!(matches!(
                auth.register(u, p).await.unwrap_err(),
                AppError::Validation(_)
            ));
            assert!(matches!(
                auth.login(u, p).await.unwrap_err(),
                AppError::Validation(_)
            ));
        }
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_a_server_error() {
        let (auth, repo) = service();
        repo.create("eve", "plaintext-by-mistake").await.unwrap();
        let err = auth.login("eve", "plaintext-by-mistake").await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_of_one_username_admit_one() {
        let (auth, repo) = service();
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..8 {
            let auth = auth.clone();
            tasks.spawn(async move { auth.register("alice", &format!("pw-{}", i)).await });
        }

        let mut created = 0;
        let mut duplicates = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined.unwrap() {
                Ok(_) => created += 1,
                Err(AppError::DuplicateUsername) => duplicates += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(duplicates, 7);
        assert_eq!(repo.rows().await.len(), 1);
    }

    #[tokio::test]
    async fn redirect_url_is_configurable() {
        let (auth, _) = service();
        let auth = auth.with_redirect_url("/dashboard");
        auth.register("alice", "secret1").await.unwrap();
        assert_eq!(auth.login("alice", "secret1").await.unwrap().redirect_url, "/dashboard");
    }
}
