//! Error handling - maps domain failures onto the handler envelope.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use blogsmith_core::DomainError;
use blogsmith_shared::HandlerResponse;
use std::fmt;

/// Application-level error type that converts to an envelope response.
#[derive(Debug)]
pub struct AppError(pub DomainError);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// Envelope carrying this error. The message is returned verbatim.
    pub fn envelope(&self) -> HandlerResponse {
        if self.0.is_client_error() {
            tracing::debug!(error = %self.0, "Rejected request");
        } else {
            tracing::error!(error = %self.0, "Request failed");
        }

        HandlerResponse::message(self.status_code().as_u16(), &self.0.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::MissingField(_)
            | DomainError::InvalidField { .. }
            | DomainError::Malformed(_)
            | DomainError::GenerationFailed => StatusCode::BAD_REQUEST,
            DomainError::FeedbackWriteFailed(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        render(self.envelope())
    }
}

/// Proxy-style response: HTTP status from the envelope, HTTP body is its JSON body.
pub fn render(envelope: HandlerResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(envelope.body)
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
