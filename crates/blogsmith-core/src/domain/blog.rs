use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated blog post - output of the generation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub blog_id: Uuid,
    pub content: String,
    pub storage_location: String,
}

/// Fresh identifier for a generated post.
///
/// 122 random bits per id, so concurrent requests need no coordination.
pub fn new_blog_id() -> Uuid {
    Uuid::new_v4()
}

/// Object key for a post: `{prefix}{blog_id}_{YYYYMMDD_HHMMSS}.txt`.
pub fn object_key(prefix: &str, blog_id: Uuid, generated_at: DateTime<Utc>) -> String {
    format!(
        "{}{}_{}.txt",
        prefix,
        blog_id,
        generated_at.format("%Y%m%d_%H%M%S")
    )
}
