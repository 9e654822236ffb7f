//! Contact and feedback submission handlers. Insert-only, one row per request.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::error::AppError;
use crate::handlers::extract::Payload;
use crate::handlers::http::AppState;
use crate::models::{ContactRequest, FeedbackRequest};

const CONTACT_REQUIRED: &str = "Please fill in all fields";
const CONTACT_FAILED: &str = "An error occurred while sending your message";
const CONTACT_THANKS: &str = "Thank you for contacting us! We will get back to you soon.";

const FEEDBACK_REQUIRED: &str = "No feedback provided";
const FEEDBACK_FAILED: &str = "An error occurred while saving your feedback";
const FEEDBACK_THANKS: &str = "Thank you for your feedback!";

/// `{status, message}` body shared by both form endpoints.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub status: &'static str,
    pub message: String,
}

impl SubmissionResponse {
    fn success(message: &str) -> Self {
        Self {
            status: "success",
            message: message.to_string(),
        }
    }
}

/// Error side of a form endpoint: client errors keep their message, server
/// faults are logged and replaced by the endpoint's fixed failure text.
#[derive(Debug)]
pub struct SubmissionRejection {
    error: AppError,
    failure_message: &'static str,
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = if self.error.is_server_error() {
            error!(error = %self.error, "submission failed");
            self.failure_message.to_string()
        } else {
            self.error.public_message()
        };
        let body = Json(SubmissionResponse {
            status: "error",
            message,
        });
        (status, body).into_response()
    }
}

/// POST /submit-contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Payload<ContactRequest>, AppError>,
) -> Result<Json<SubmissionResponse>, SubmissionRejection> {
    let reject = |error: AppError| SubmissionRejection {
        error,
        failure_message: CONTACT_FAILED,
    };
    let Payload(body) = payload.map_err(reject)?;
    let contact = body
        .into_message()
        .ok_or_else(|| reject(AppError::Validation(CONTACT_REQUIRED.to_string())))?;

    let id = state
        .submissions()
        .save_contact(&contact)
        .await
        .map_err(reject)?;

    info!(contact_id = id, "contact message saved");
    Ok(Json(SubmissionResponse::success(CONTACT_THANKS)))
}

/// POST /submit_feedback. Accepts JSON or urlencoded form bodies.
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Payload<FeedbackRequest>, AppError>,
) -> Result<Json<SubmissionResponse>, SubmissionRejection> {
    let reject = |error: AppError| SubmissionRejection {
        error,
        failure_message: FEEDBACK_FAILED,
    };
    let Payload(body) = payload.map_err(reject)?;
    let text = body
        .into_text()
        .ok_or_else(|| reject(AppError::Validation(FEEDBACK_REQUIRED.to_string())))?;

    let id = state
        .submissions()
        .save_feedback(&text)
        .await
        .map_err(reject)?;

    info!(feedback_id = id, "feedback saved");
    Ok(Json(SubmissionResponse::success(FEEDBACK_THANKS)))
}
