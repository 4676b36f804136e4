//! Inbound request model and payload decoding.
//!
//! Callers pick a path by payload shape alone, so decoding is explicit:
//! a payload carrying the feedback marker is a feedback submission,
//! anything else must be a generation request.

use serde_json::{Map, Value};

use crate::error::DomainError;

pub const DEFAULT_WORD_COUNT: u32 = 500;
pub const DEFAULT_TONE: &str = "neutral";
pub const DEFAULT_AUDIENCE: &str = "general";

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Request to generate a blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topics: Vec<String>,
    pub word_count: u32,
    pub tone: String,
    pub target_audience: String,
}

impl GenerationRequest {
    /// Create a request with default length, tone and audience.
    pub fn new(topics: Vec<String>) -> Self {
        Self {
            topics,
            word_count: DEFAULT_WORD_COUNT,
            tone: DEFAULT_TONE.to_string(),
            target_audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, DomainError> {
        let topics = match object.get("topics") {
            None | Some(Value::Null) => return Err(DomainError::MissingField("topics")),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item.as_str().map(str::trim) {
                    Some("") => Err(DomainError::invalid("topics", "topics must not be blank")),
                    Some(topic) => Ok(topic.to_string()),
                    None => Err(DomainError::invalid("topics", "expected an array of strings")),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(DomainError::invalid("topics", "expected an array of strings"));
            }
        };

        if topics.is_empty() {
            return Err(DomainError::invalid("topics", "at least one topic is required"));
        }

        let word_count = match object.get("word_count") {
            None | Some(Value::Null) => DEFAULT_WORD_COUNT,
            Some(value) => value
                .as_u64()
                .filter(|n| *n > 0)
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| DomainError::invalid("word_count", "expected a positive integer"))?,
        };

        Ok(Self {
            topics,
            word_count,
            tone: optional_string(object, "tone")?.unwrap_or_else(|| DEFAULT_TONE.to_string()),
            target_audience: optional_string(object, "target_audience")?
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
        })
    }
}

/// Feedback left against a previously generated post.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub blog_id: String,
    pub rating: u8,
    pub feedback: String,
}

impl FeedbackSubmission {
    fn from_object(object: &Map<String, Value>) -> Result<Self, DomainError> {
        let blog_id = match object.get("blog_id") {
            None | Some(Value::Null) => return Err(DomainError::MissingField("blog_id")),
            Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
            Some(_) => {
                return Err(DomainError::invalid("blog_id", "expected a non-empty string"));
            }
        };

        let rating = match object.get("rating") {
            None | Some(Value::Null) => return Err(DomainError::MissingField("rating")),
            Some(value) => value
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .filter(|n| (MIN_RATING..=MAX_RATING).contains(n))
                .ok_or_else(|| {
                    DomainError::invalid(
                        "rating",
                        format!("expected an integer between {MIN_RATING} and {MAX_RATING}"),
                    )
                })?,
        };

        // The corrected shape carries the text under `feedback_text`; the legacy
        // shape reuses `feedback`, where a bare `true` is only the marker.
        let feedback = match optional_string(object, "feedback_text")? {
            Some(text) => text,
            None => match object.get("feedback") {
                Some(Value::String(text)) => text.clone(),
                _ => String::new(),
            },
        };

        Ok(Self {
            blog_id,
            rating,
            feedback,
        })
    }
}

/// A decoded inbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogRequest {
    Generate(GenerationRequest),
    Feedback(FeedbackSubmission),
}

impl BlogRequest {
    /// Decode a JSON payload, routing on the feedback marker.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::Malformed("expected a JSON object".to_string()))?;

        if Self::is_feedback(object) {
            FeedbackSubmission::from_object(object).map(Self::Feedback)
        } else {
            GenerationRequest::from_object(object).map(Self::Generate)
        }
    }

    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| DomainError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    fn is_feedback(object: &Map<String, Value>) -> bool {
        let marked = object
            .get("is_feedback")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let legacy = object
            .get("feedback")
            .is_some_and(|v| !matches!(v, Value::Null | Value::Bool(false)));

        marked || legacy
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DomainError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DomainError::invalid(field, "expected a string")),
    }
}
