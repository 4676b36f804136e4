//! Blog generation and feedback handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use blogsmith_core::{DomainError, Reply};
use blogsmith_shared::dto::{FEEDBACK_SUBMITTED, GENERATION_COMPLETED, GenerationBody};
use blogsmith_shared::{HandlerResponse, InvokeEvent};

use crate::middleware::error::{AppError, AppResult, render};
use crate::state::AppState;

/// POST /api/blog
///
/// Proxy-style: the envelope's status becomes the HTTP status and its body
/// becomes the HTTP body.
pub async fn blog(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let envelope = dispatch(&state, &body).await?;
    Ok(render(envelope))
}

/// POST /api/invoke
///
/// Invocation-style: the request JSON arrives as a string under `body` and
/// the envelope itself is returned with HTTP 200.
pub async fn invoke(state: web::Data<AppState>, event: web::Bytes) -> HttpResponse {
    let envelope = match invoke_payload(&event) {
        Ok(payload) => dispatch(&state, payload.as_bytes()).await,
        Err(e) => Err(e),
    };

    HttpResponse::Ok().json(envelope.unwrap_or_else(|e| e.envelope()))
}

fn invoke_payload(event: &[u8]) -> Result<String, AppError> {
    let event: InvokeEvent =
        serde_json::from_slice(event).map_err(|e| DomainError::Malformed(e.to_string()))?;
    event
        .body
        .ok_or(AppError(DomainError::MissingField("body")))
}

async fn dispatch(state: &AppState, payload: &[u8]) -> Result<HandlerResponse, AppError> {
    let value: Value =
        serde_json::from_slice(payload).map_err(|e| DomainError::Malformed(e.to_string()))?;

    let envelope = match state.blogs.handle(&value).await? {
        Reply::Generated(result) => {
            let body = GenerationBody {
                message: GENERATION_COMPLETED.to_string(),
                blog_id: result.blog_id.to_string(),
                blog_content: result.content,
                s3_location: result.storage_location,
            };
            HandlerResponse::json(200, &body).map_err(|e| DomainError::Internal(e.to_string()))?
        }
        Reply::FeedbackRecorded(_) => HandlerResponse::message(200, FEEDBACK_SUBMITTED),
    };

    Ok(envelope)
}
