//! # Blogsmith Infrastructure
//!
//! Concrete implementations of the ports defined in `blogsmith-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external stores, in-memory only
//! - `s3` - S3-compatible object storage via rust-s3
//! - `redis` - Redis-backed feedback records

pub mod inference;
pub mod object_store;
pub mod records;

// Re-exports - always available
pub use inference::{BedrockTextGenerator, InferenceConfig};
pub use object_store::{InMemoryObjectStore, S3Config};
pub use records::{InMemoryFeedbackStore, RedisConfig};

#[cfg(feature = "s3")]
pub use object_store::S3ObjectStore;

#[cfg(feature = "redis")]
pub use records::RedisFeedbackStore;
