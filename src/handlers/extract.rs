//! Request body extractor accepting JSON or urlencoded forms.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body as a form or as JSON, going by `Content-Type`.
/// Any other (or missing) content type is read as an empty object, so the
/// handler's own presence checks decide the answer.
/// Malformed bodies become [`AppError::Validation`] (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Unparsed,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase());

    match mime.as_deref() {
        Some("application/x-www-form-urlencoded") => BodyKind::Form,
        Some(m) if m == "application/json" || m.ends_with("+json") => BodyKind::Json,
        _ => BodyKind::Unparsed,
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Unparsed => {
                let empty = serde_json::Value::Object(serde_json::Map::new());
                let value = serde_json::from_value(empty)
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                Ok(Payload(value))
            }
        }
    }
}
