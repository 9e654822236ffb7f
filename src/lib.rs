//! TextAI backends: user registration/login, contact form and feedback intake.
//!
//! Three independent HTTP servers share this crate. Each one talks to the same
//! MySQL schema through injected repositories.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;

pub use auth::AuthService;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::{forms, http};

/// Service names reported by `GET /health`.
pub const AUTH_SERVICE: &str = "auth";
pub const CONTACT_SERVICE: &str = "contact";
pub const FEEDBACK_SERVICE: &str = "feedback";

/// Auth server router (register, login, health). Used by main and by integration tests.
pub fn create_auth_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/health", get(|| http::health(AUTH_SERVICE)))
        .with_state(state)
}

/// Contact server router.
pub fn create_contact_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/submit-contact", post(forms::submit_contact))
        .route("/health", get(|| http::health(CONTACT_SERVICE)))
        .with_state(state)
}

/// Feedback server router.
pub fn create_feedback_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/submit_feedback", post(forms::submit_feedback))
        .route("/health", get(|| http::health(FEEDBACK_SERVICE)))
        .with_state(state)
}
