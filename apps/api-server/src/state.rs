//! Application state - shared across all handlers.
//!
//! Collaborator clients are built once here and injected into the blog
//! service; handlers never construct their own.

use std::sync::Arc;

use blogsmith_core::BlogService;
use blogsmith_core::ports::{FeedbackStore, InferenceError, ObjectStore, TextGenerator};
use blogsmith_infra::{BedrockTextGenerator, InMemoryFeedbackStore, InMemoryObjectStore};

#[cfg(feature = "s3")]
use blogsmith_infra::S3ObjectStore;

#[cfg(feature = "redis")]
use blogsmith_infra::RedisFeedbackStore;

use crate::config::{AppConfig, ObjectStoreBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<BlogService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Stores that are not configured, or fail to connect, fall back to memory.
    pub async fn new(config: &AppConfig) -> Result<Self, InferenceError> {
        let generator: Arc<dyn TextGenerator> =
            Arc::new(BedrockTextGenerator::new(config.inference.clone())?);

        let objects = Self::object_store(config);
        let feedback = Self::feedback_store(config).await;

        let service = BlogService::new(generator, objects, feedback)
            .with_settings(config.generation.clone())
            .with_key_prefix(config.key_prefix.clone());

        tracing::info!("Application state initialized");

        Ok(Self::with_service(service))
    }

    pub fn with_service(service: BlogService) -> Self {
        Self {
            blogs: Arc::new(service),
        }
    }

    fn object_store(config: &AppConfig) -> Arc<dyn ObjectStore> {
        let memory = || -> Arc<dyn ObjectStore> {
            Arc::new(InMemoryObjectStore::new(config.s3.bucket.clone()))
        };

        match config.object_store {
            #[cfg(feature = "s3")]
            ObjectStoreBackend::S3 => match S3ObjectStore::new(&config.s3) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        "Failed to configure S3: {}. Using in-memory object store.",
                        e
                    );
                    memory()
                }
            },
            #[cfg(not(feature = "s3"))]
            ObjectStoreBackend::S3 => {
                tracing::warn!("OBJECT_STORE=s3 but the s3 feature is disabled. Using in-memory object store.");
                memory()
            }
            ObjectStoreBackend::Memory => {
                tracing::warn!("OBJECT_STORE not set to s3. Generated posts are kept in memory.");
                memory()
            }
        }
    }

    async fn feedback_store(config: &AppConfig) -> Arc<dyn FeedbackStore> {
        #[cfg(feature = "redis")]
        {
            if let Some(redis) = &config.redis {
                match RedisFeedbackStore::new(redis.clone()).await {
                    Ok(store) => return Arc::new(store),
                    Err(e) => tracing::error!(
                        "Failed to connect to Redis: {}. Using in-memory feedback store.",
                        e
                    ),
                }
            } else {
                tracing::warn!("REDIS_URL not set. Feedback is kept in memory.");
            }
        }

        #[cfg(not(feature = "redis"))]
        {
            let _ = &config.redis;
            tracing::info!("Running without redis feature - using in-memory feedback store");
        }

        Arc::new(InMemoryFeedbackStore::new())
    }
}
