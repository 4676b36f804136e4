//! Application configuration loaded from environment variables.

use std::env;

use blogsmith_core::services::{DEFAULT_KEY_PREFIX, GenerationSettings};
use blogsmith_infra::{InferenceConfig, RedisConfig, S3Config};

/// Which object store backs generated posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStoreBackend {
    Memory,
    S3,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub inference: InferenceConfig,
    pub generation: GenerationSettings,
    pub object_store: ObjectStoreBackend,
    pub s3: S3Config,
    pub key_prefix: String,
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let object_store = match env::var("OBJECT_STORE").map(|v| v.to_lowercase()).as_deref() {
            Ok("s3") => ObjectStoreBackend::S3,
            _ => ObjectStoreBackend::Memory,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            inference: InferenceConfig::from_env(),
            generation: Self::generation_from_env(),
            object_store,
            s3: S3Config::from_env(),
            key_prefix: env::var("BLOG_KEY_PREFIX")
                .unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string()),
            redis: RedisConfig::from_env(),
        }
    }

    /// Sampling constants, each overridable on its own.
    fn generation_from_env() -> GenerationSettings {
        let defaults = GenerationSettings::default();

        GenerationSettings {
            max_len_ceiling: parse_var("GENERATION_MAX_LEN_CEILING")
                .unwrap_or(defaults.max_len_ceiling),
            len_multiplier: parse_var("GENERATION_LEN_MULTIPLIER")
                .unwrap_or(defaults.len_multiplier),
            temperature: parse_var("GENERATION_TEMPERATURE").unwrap_or(defaults.temperature),
            top_p: parse_var("GENERATION_TOP_P").unwrap_or(defaults.top_p),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
