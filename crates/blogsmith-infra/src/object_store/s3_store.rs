//! S3 object store backed by rust-s3.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};

use blogsmith_core::ports::{ObjectStore, ObjectStoreError};

use super::S3Config;

/// S3-backed object store.
///
/// Credentials come from the usual AWS environment variables or profile.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    name: String,
}

impl S3ObjectStore {
    pub fn new(config: &S3Config) -> Result<Self, ObjectStoreError> {
        let credentials =
            Credentials::default().map_err(|e| ObjectStoreError::Connection(e.to_string()))?;
        Self::with_credentials(config, credentials)
    }

    pub fn with_credentials(
        config: &S3Config,
        credentials: Credentials,
    ) -> Result<Self, ObjectStoreError> {
        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse()
                .map_err(|e| ObjectStoreError::Connection(format!("invalid region: {e}")))?,
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| ObjectStoreError::Connection(e.to_string()))?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        tracing::info!(bucket = %config.bucket, region = %config.region, "S3 object store ready");

        Ok(Self {
            bucket,
            name: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, body, content_type)
            .await
            .map_err(|e| ObjectStoreError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(ObjectStoreError::Write {
                key: key.to_string(),
                reason: format!("status {status}"),
            });
        }

        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("s3://{}/{}", self.name, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store(endpoint: String) -> S3ObjectStore {
        let config = S3Config {
            bucket: "bloggenerated".to_string(),
            region: "us-east-1".to_string(),
            endpoint: Some(endpoint),
            path_style: true,
        };
        let credentials =
            Credentials::new(Some("test-access"), Some("test-secret"), None, None, None).unwrap();
        S3ObjectStore::with_credentials(&config, credentials).unwrap()
    }

    #[tokio::test]
    async fn test_put_object() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/bloggenerated/blog-output/a.txt"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        store(server.uri())
            .put("blog-output/a.txt", b"hello", "text/plain")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_put_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = store(server.uri())
            .put("blog-output/a.txt", b"hello", "text/plain")
            .await
            .unwrap_err();

        assert!(matches!(err, ObjectStoreError::Write { .. }));
    }

    #[test]
    fn test_location() {
        let store = store("http://127.0.0.1:9000".to_string());
        assert_eq!(
            store.location("blog-output/a.txt"),
            "s3://bloggenerated/blog-output/a.txt"
        );
    }
}
