//! In-memory feedback store - used when Redis is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogsmith_core::domain::FeedbackRecord;
use blogsmith_core::ports::{FeedbackStore, RecordStoreError};

/// Append-only in-memory feedback store.
///
/// Note: Records are lost on process restart.
#[derive(Default)]
pub struct InMemoryFeedbackStore {
    records: RwLock<Vec<FeedbackRecord>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in write order.
    pub async fn records(&self) -> Vec<FeedbackRecord> {
        self.records.read().await.clone()
    }

    /// Records left against one post, in write order.
    pub async fn list_for(&self, blog_id: &str) -> Vec<FeedbackRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.blog_id == blog_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn put(&self, record: &FeedbackRecord) -> Result<(), RecordStoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(blog_id: &str, rating: u8) -> FeedbackRecord {
        FeedbackRecord {
            blog_id: blog_id.to_string(),
            rating,
            feedback: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_records_are_appended() {
        let store = InMemoryFeedbackStore::new();
        store.put(&record("a", 5)).await.unwrap();
        store.put(&record("a", 2)).await.unwrap();
        store.put(&record("b", 3)).await.unwrap();

        let for_a = store.list_for("a").await;
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].rating, 5);
        assert_eq!(for_a[1].rating, 2);
        assert_eq!(store.records().await.len(), 3);
    }
}
