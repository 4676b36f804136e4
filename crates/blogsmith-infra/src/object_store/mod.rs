//! Object store implementations - S3 and in-memory fallback.

mod memory;

#[cfg(feature = "s3")]
mod s3_store;

pub use memory::InMemoryObjectStore;

#[cfg(feature = "s3")]
pub use s3_store::S3ObjectStore;

pub const DEFAULT_BUCKET: &str = "bloggenerated";

/// S3 connection configuration.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket holding generated posts
    pub bucket: String,
    /// Region name (e.g., ap-south-1)
    pub region: String,
    /// Custom endpoint for S3-compatible stores (MinIO, R2)
    pub endpoint: Option<String>,
    /// Address the bucket as a path segment instead of a subdomain
    pub path_style: bool,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            region: "ap-south-1".to_string(),
            endpoint: None,
            path_style: false,
        }
    }
}

impl S3Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            bucket: std::env::var("BLOG_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "ap-south-1".to_string()),
            endpoint: std::env::var("S3_ENDPOINT").ok(),
            path_style: std::env::var("S3_PATH_STYLE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
