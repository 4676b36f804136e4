//! Blog service - the request pipeline behind the single handler endpoint.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    BlogRequest, FeedbackRecord, FeedbackSubmission, GenerationRequest, GenerationResult,
    new_blog_id, object_key,
};
use crate::error::DomainError;
use crate::ports::{FeedbackStore, ObjectStore, TextGenerator};

use super::postprocess::clean_generation;
use super::prompt::{GenerationSettings, build_prompt};

pub const DEFAULT_KEY_PREFIX: &str = "blog-output/";

const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Successful outcome of one handled request.
#[derive(Debug, Clone)]
pub enum Reply {
    Generated(GenerationResult),
    FeedbackRecorded(FeedbackRecord),
}

/// Request pipeline over injected collaborators.
///
/// Holds no per-request state; one instance serves every request.
pub struct BlogService {
    generator: Arc<dyn TextGenerator>,
    objects: Arc<dyn ObjectStore>,
    feedback: Arc<dyn FeedbackStore>,
    settings: GenerationSettings,
    key_prefix: String,
}

impl BlogService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        objects: Arc<dyn ObjectStore>,
        feedback: Arc<dyn FeedbackStore>,
    ) -> Self {
        Self {
            generator,
            objects,
            feedback,
            settings: GenerationSettings::default(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Decode `payload` and run whichever path its shape selects.
    pub async fn handle(&self, payload: &Value) -> Result<Reply, DomainError> {
        match BlogRequest::from_value(payload)? {
            BlogRequest::Generate(request) => self.generate_blog(request).await.map(Reply::Generated),
            BlogRequest::Feedback(submission) => self
                .submit_feedback(submission)
                .await
                .map(Reply::FeedbackRecorded),
        }
    }

    /// Build the prompt, call the model and clean its output.
    pub async fn write_post(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        let prompt = build_prompt(request);
        let params = self.settings.sampling_for(request.word_count);

        tracing::debug!(
            topics = request.topics.len(),
            max_gen_len = params.max_gen_len,
            "Requesting generation"
        );

        let raw = self.generator.generate(&prompt, &params).await?;
        let cleaned = clean_generation(&raw);

        if cleaned.is_empty() {
            tracing::warn!(raw_len = raw.len(), "No blog was generated");
            return Err(DomainError::GenerationFailed);
        }

        Ok(cleaned)
    }

    /// Generate a post and persist it.
    ///
    /// A failed object write is logged and otherwise ignored: the caller still
    /// receives the content and the location it would have been stored at.
    pub async fn generate_blog(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, DomainError> {
        let content = self.write_post(&request).await?;

        let blog_id = new_blog_id();
        let key = object_key(&self.key_prefix, blog_id, Utc::now());
        let storage_location = self.objects.location(&key);

        match self.objects.put(&key, content.as_bytes(), CONTENT_TYPE).await {
            Ok(()) => tracing::info!(%blog_id, key = %key, "Blog saved to object store"),
            Err(e) => tracing::error!(
                %blog_id,
                key = %key,
                error = %e,
                "Failed to save blog to object store"
            ),
        }

        Ok(GenerationResult {
            blog_id,
            content,
            storage_location,
        })
    }

    /// Record feedback against a post. Write failures are returned to the caller.
    pub async fn submit_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, DomainError> {
        let record = FeedbackRecord::new(submission);

        self.feedback.put(&record).await.map_err(|e| {
            tracing::error!(blog_id = %record.blog_id, error = %e, "Failed to save feedback");
            DomainError::FeedbackWriteFailed(e)
        })?;

        tracing::info!(blog_id = %record.blog_id, rating = record.rating, "Feedback recorded");
        Ok(record)
    }
}
