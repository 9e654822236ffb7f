//! Auth HTTP handlers: register, login.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use validator::Validate;

use crate::auth::service::CREDENTIALS_REQUIRED;
use crate::error::AppError;
use crate::handlers::extract::Payload;
use crate::handlers::http::AppState;
use crate::models::{AuthenticatedUser, RegisteredUser};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn into_parts(self) -> Result<(String, String), AppError> {
        let invalid = || AppError::Validation(CREDENTIALS_REQUIRED.to_string());
        self.validate().map_err(|_| invalid())?;
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: AuthenticatedUser,
    pub redirect: bool,
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
}

/// Error side of the auth endpoints. Login failures carry `redirect: false`;
/// server faults are logged and reported without detail.
#[derive(Debug)]
pub struct AuthRejection {
    action: AuthAction,
    error: AppError,
}

impl AuthRejection {
    fn register(error: AppError) -> Self {
        Self {
            action: AuthAction::Register,
            error,
        }
    }

    fn login(error: AppError) -> Self {
        Self {
            action: AuthAction::Login,
            error,
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = if self.error.is_server_error() {
            error!(error = %self.error, action = ?self.action, "auth request failed");
            match self.action {
                AuthAction::Register => "Server error during registration".to_string(),
                AuthAction::Login => "Server error during login".to_string(),
            }
        } else {
            self.error.public_message()
        };

        let body = match (&self.action, &self.error) {
            (AuthAction::Login, AppError::Validation(_)) | (AuthAction::Register, _) => {
                json!({ "error": message })
            }
            (AuthAction::Login, _) => json!({ "error": message, "redirect": false }),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Payload<CredentialsRequest>, AppError>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthRejection> {
    let Payload(body) = payload.map_err(AuthRejection::register)?;
    let (username, password) = body.into_parts().map_err(AuthRejection::register)?;

    let user = state
        .auth_service()
        .register(&username, &password)
        .await
        .map_err(AuthRejection::register)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful",
            user,
        }),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Payload<CredentialsRequest>, AppError>,
) -> Result<Json<LoginResponse>, AuthRejection> {
    let Payload(body) = payload.map_err(AuthRejection::login)?;
    let (username, password) = body.into_parts().map_err(AuthRejection::login)?;

    let success = state
        .auth_service()
        .login(&username, &password)
        .await
        .map_err(AuthRejection::login)?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        user: success.user,
        redirect: true,
        redirect_url: success.redirect_url,
    }))
}
