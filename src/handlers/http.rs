//! Shared state and the health endpoint.

use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::AuthService;
use crate::repositories::SubmissionRepository;

/// Shared application state for all three backends.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub submissions: Arc<dyn SubmissionRepository>,
}

impl AppState {
    pub fn new(auth_service: AuthService, submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self {
            auth_service,
            submissions,
        }
    }

    pub fn auth_service(&self) -> &AuthService {
        &self.auth_service
    }

    pub fn submissions(&self) -> &dyn SubmissionRepository {
        self.submissions.as_ref()
    }
}

/// GET /health. Reports liveness and which backend answered.
pub async fn health(service: &'static str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": service })),
    )
}
