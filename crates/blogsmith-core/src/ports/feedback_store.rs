use async_trait::async_trait;

use crate::domain::FeedbackRecord;

/// Feedback store trait - abstraction over key-value record stores (Redis, in-memory).
///
/// Records are append-only: there is no update or delete path.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist one feedback record.
    async fn put(&self, record: &FeedbackRecord) -> Result<(), RecordStoreError>;
}

/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
