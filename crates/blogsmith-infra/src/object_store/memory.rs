//! In-memory object store - used when no S3 bucket is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogsmith_core::ports::{ObjectStore, ObjectStoreError};

/// In-memory object store keyed by object key.
///
/// Note: Objects are lost on process restart.
pub struct InMemoryObjectStore {
    bucket: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Read back a stored object.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new(super::DEFAULT_BUCKET)
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(
        &self,
        key: &str,
        body: &[u8],
        _content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        let mut objects = self.objects.write().await;
        objects.insert(key.to_string(), body.to_vec());
        tracing::debug!(bucket = %self.bucket, key = %key, bytes = body.len(), "Stored object in memory");
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory://{}/{}", self.bucket, key)
    }
}
