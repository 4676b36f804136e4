//! Inference port - abstraction over the hosted model endpoint.

use async_trait::async_trait;
use serde::Serialize;

/// Sampling parameters sent alongside a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingParams {
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

/// Text generator trait - turns a prompt into raw model output.
///
/// Implementations own their timeout and retry policy; callers make a
/// single call and treat any error as final.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate raw text for `prompt`.
    ///
    /// An empty string is a valid answer; a response without any generation
    /// at all is `InferenceError::NoGeneration`.
    async fn generate(&self, prompt: &str, params: &SamplingParams)
    -> Result<String, InferenceError>;
}

/// Inference errors.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Inference request timed out")]
    Timeout,

    #[error("Inference transport error: {0}")]
    Transport(String),

    #[error("Inference endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid inference response: {0}")]
    InvalidResponse(String),

    #[error("Inference response contained no generation")]
    NoGeneration,
}

impl InferenceError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) | Self::NoGeneration => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        let status = |status| InferenceError::Status {
            status,
            body: String::new(),
        };

        assert!(status(429).is_retryable());
        assert!(status(503).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(!status(403).is_retryable());
        assert!(InferenceError::Timeout.is_retryable());
        assert!(!InferenceError::NoGeneration.is_retryable());
    }
}
