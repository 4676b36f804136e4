//! Object store port - durable key to bytes storage for generated posts.

use async_trait::async_trait;

/// Object store trait - abstraction over object storage backends (S3, in-memory).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key`, replacing nothing: keys are never reused.
    async fn put(&self, key: &str, body: &[u8], content_type: &str)
    -> Result<(), ObjectStoreError>;

    /// Locator string for `key`, independent of whether a write succeeded.
    fn location(&self, key: &str) -> String;
}

/// Object store errors.
#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Write of {key} failed: {reason}")]
    Write { key: String, reason: String },
}
