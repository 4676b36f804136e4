//! Data Transfer Objects - request/response bodies for the blog endpoint.

use serde::{Deserialize, Serialize};

pub const GENERATION_COMPLETED: &str = "Blog Generation is completed";
pub const FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully";

/// Request to generate a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationPayload {
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

/// Feedback submission in the marker-plus-text shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub is_feedback: bool,
    pub blog_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_text: Option<String>,
}

impl FeedbackPayload {
    pub fn new(blog_id: impl Into<String>, rating: u8, feedback_text: Option<String>) -> Self {
        Self {
            is_feedback: true,
            blog_id: blog_id.into(),
            rating,
            feedback_text,
        }
    }
}

/// Body returned for a completed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationBody {
    pub message: String,
    pub blog_id: String,
    pub blog_content: String,
    pub s3_location: String,
}
