//! Redis feedback store.
//!
//! Each post gets a list at `{table}:{blog_id}`; every submission appends
//! one JSON-encoded record to it.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use blogsmith_core::domain::FeedbackRecord;
use blogsmith_core::ports::{FeedbackStore, RecordStoreError};

use super::RedisConfig;

/// Redis-backed feedback store.
///
/// Uses connection manager for automatic reconnection.
pub struct RedisFeedbackStore {
    conn: ConnectionManager,
    table: String,
}

impl RedisFeedbackStore {
    pub async fn new(config: RedisConfig) -> Result<Self, RecordStoreError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| RecordStoreError::Connection(e.to_string()))?;

        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| RecordStoreError::Connection("Connection timed out".to_string()))?
            .map_err(|e| RecordStoreError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, table = %config.table, "Connected to Redis feedback store");

        Ok(Self {
            conn,
            table: config.table,
        })
    }

    fn list_key(&self, blog_id: &str) -> String {
        format!("{}:{}", self.table, blog_id)
    }

    /// Records left against one post, in write order.
    pub async fn list_for(&self, blog_id: &str) -> Result<Vec<FeedbackRecord>, RecordStoreError> {
        let mut conn = self.conn.clone();
        let items: Vec<String> = conn
            .lrange(self.list_key(blog_id), 0, -1)
            .await
            .map_err(|e| RecordStoreError::Operation(e.to_string()))?;

        items
            .iter()
            .map(|item| {
                serde_json::from_str(item)
                    .map_err(|e| RecordStoreError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl FeedbackStore for RedisFeedbackStore {
    async fn put(&self, record: &FeedbackRecord) -> Result<(), RecordStoreError> {
        let item = serde_json::to_string(record)
            .map_err(|e| RecordStoreError::Serialization(e.to_string()))?;

        let mut conn = self.conn.clone();
        conn.rpush::<_, _, ()>(self.list_key(&record.blog_id), item)
            .await
            .map_err(|e| RecordStoreError::Operation(e.to_string()))?;

        Ok(())
    }
}
