//! Input validation for generation and feedback submissions.
//!
//! Everything here runs before any network call.

use clap::ValueEnum;
use thiserror::Error;

use blogsmith_shared::dto::{FeedbackPayload, GenerationPayload};

pub const MAX_TOPICS: usize = 5;
pub const MIN_WORDS: u32 = 100;
pub const MAX_WORDS: u32 = 2000;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tone {
    Neutral,
    Formal,
    Casual,
    Humorous,
    Professional,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Professional => "professional",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("enter between 1 and {} topics", MAX_TOPICS)]
    TopicCount,
    #[error("topic {0} is empty")]
    BlankTopic(usize),
    #[error("word count must be between {} and {}", MIN_WORDS, MAX_WORDS)]
    WordCount,
    #[error("rating must be between {} and {}", MIN_RATING, MAX_RATING)]
    Rating,
}

/// A generation request as entered by the user.
#[derive(Debug, Clone)]
pub struct GenerateForm {
    pub topics: Vec<String>,
    pub word_count: u32,
    pub tone: Tone,
    pub audience: String,
}

impl GenerateForm {
    pub fn into_payload(self) -> Result<GenerationPayload, FormError> {
        if self.topics.is_empty() || self.topics.len() > MAX_TOPICS {
            return Err(FormError::TopicCount);
        }
        if let Some(index) = self.topics.iter().position(|t| t.trim().is_empty()) {
            return Err(FormError::BlankTopic(index + 1));
        }
        if !(MIN_WORDS..=MAX_WORDS).contains(&self.word_count) {
            return Err(FormError::WordCount);
        }

        Ok(GenerationPayload {
            topics: self.topics.iter().map(|t| t.trim().to_string()).collect(),
            word_count: Some(self.word_count),
            tone: Some(self.tone.as_str().to_string()),
            target_audience: Some(self.audience),
        })
    }
}

pub fn check_rating(rating: u8) -> Result<u8, FormError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(FormError::Rating)
    }
}

/// Validate and build a feedback submission.
pub fn feedback_payload(
    blog_id: &str,
    rating: u8,
    comment: Option<String>,
) -> Result<FeedbackPayload, FormError> {
    Ok(FeedbackPayload::new(blog_id, check_rating(rating)?, comment))
}

/// Client-side word count of generated content.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(topics: &[&str], word_count: u32) -> GenerateForm {
        GenerateForm {
            topics: topics.iter().map(|t| t.to_string()).collect(),
            word_count,
            tone: Tone::Casual,
            audience: "students".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let payload = form(&[" rust ", "wasm"], 600).into_payload().unwrap();

        assert_eq!(payload.topics, vec!["rust", "wasm"]);
        assert_eq!(payload.word_count, Some(600));
        assert_eq!(payload.tone.as_deref(), Some("casual"));
        assert_eq!(payload.target_audience.as_deref(), Some("students"));
    }

    #[test]
    fn test_topic_limits() {
        assert_eq!(form(&[], 500).into_payload().unwrap_err(), FormError::TopicCount);
        assert_eq!(
            form(&["a", "b", "c", "d", "e", "f"], 500).into_payload().unwrap_err(),
            FormError::TopicCount
        );
        assert_eq!(
            form(&["a", "  "], 500).into_payload().unwrap_err(),
            FormError::BlankTopic(2)
        );
    }

    #[test]
    fn test_word_count_bounds() {
        assert!(form(&["a"], 100).into_payload().is_ok());
        assert!(form(&["a"], 2000).into_payload().is_ok());
        assert_eq!(form(&["a"], 99).into_payload().unwrap_err(), FormError::WordCount);
        assert_eq!(form(&["a"], 2001).into_payload().unwrap_err(), FormError::WordCount);
    }

    #[test]
    fn test_feedback_rating_bounds() {
        assert!(feedback_payload("id", 1, None).is_ok());
        assert_eq!(feedback_payload("id", 0, None).unwrap_err(), FormError::Rating);
        assert_eq!(feedback_payload("id", 6, None).unwrap_err(), FormError::Rating);

        let payload = feedback_payload("id", 4, Some("nice".to_string())).unwrap();
        assert!(payload.is_feedback);
        assert_eq!(payload.feedback_text.as_deref(), Some("nice"));
    }

    #[test]
    fn test_word_count_splits_on_whitespace() {
        assert_eq!(word_count("**Title**\nOne two.\n\nThree"), 4);
        assert_eq!(word_count("   "), 0);
    }
}
