//! Feedback record stores - Redis and in-memory fallback.

use std::time::Duration;

mod memory;

#[cfg(feature = "redis")]
mod redis_store;

pub use memory::InMemoryFeedbackStore;

#[cfg(feature = "redis")]
pub use redis_store::RedisFeedbackStore;

pub const DEFAULT_TABLE: &str = "BlogFeedback";

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Key prefix standing in for the table name
    pub table: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `REDIS_URL` is unset.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("REDIS_URL").ok()?;

        Some(Self {
            url,
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            table: std::env::var("FEEDBACK_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
        })
    }
}
