//! Domain-level error types.
//!
//! The `Display` text of each variant is the message returned to callers,
//! so changing it changes the wire contract.

use thiserror::Error;

use crate::ports::{InferenceError, RecordStoreError};

/// Domain errors - request pipeline failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required key was absent from the request payload.
    #[error("Missing required key: '{0}'")]
    MissingField(&'static str),

    /// A key was present but carried an unusable value.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The payload could not be read as a JSON object at all.
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// The model produced no usable text. Not an exception on the caller's side.
    #[error("Failed to generate blog")]
    GenerationFailed,

    #[error("Failed to submit feedback")]
    FeedbackWriteFailed(#[source] RecordStoreError),

    #[error("Error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the failure was caused by the caller's input or upstream output
    /// rather than by this service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidField { .. }
                | Self::Malformed(_)
                | Self::GenerationFailed
        )
    }
}

impl From<InferenceError> for DomainError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::NoGeneration => DomainError::GenerationFailed,
            other => DomainError::Internal(other.to_string()),
        }
    }
}
