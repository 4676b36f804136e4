use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeedbackSubmission;

/// Feedback record - one rating left against a generated post.
///
/// `blog_id` is whatever the caller sent; it is not checked against stored posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub blog_id: String,
    pub rating: u8,
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Create a record stamped with the current time.
    pub fn new(submission: FeedbackSubmission) -> Self {
        Self {
            blog_id: submission.blog_id,
            rating: submission.rating,
            feedback: submission.feedback,
            timestamp: Utc::now(),
        }
    }
}
