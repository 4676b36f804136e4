//! HTTP text generator for the Bedrock runtime `InvokeModel` API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use blogsmith_core::ports::{InferenceError, SamplingParams, TextGenerator};

/// Inference endpoint configuration.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Base URL of the runtime (e.g., https://bedrock-runtime.ap-south-1.amazonaws.com)
    pub endpoint: String,
    /// Model to invoke
    pub model_id: String,
    /// Bearer API key, if the endpoint requires one
    pub api_key: Option<String>,
    /// Read timeout for a single attempt
    pub read_timeout: Duration,
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay before attempt `n + 1` is `retry_backoff * n`
    pub retry_backoff: Duration,
}

const DEFAULT_REGION: &str = "ap-south-1";
const DEFAULT_MODEL_ID: &str = "meta.llama3-8b-instruct-v1:0";

fn regional_endpoint(region: &str) -> String {
    format!("https://bedrock-runtime.{region}.amazonaws.com")
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: regional_endpoint(DEFAULT_REGION),
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_key: None,
            read_timeout: Duration::from_secs(300),
            max_attempts: 3,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl InferenceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let region =
            std::env::var("INFERENCE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Self {
            endpoint: std::env::var("INFERENCE_ENDPOINT")
                .unwrap_or_else(|_| regional_endpoint(&region)),
            model_id: std::env::var("INFERENCE_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            api_key: std::env::var("INFERENCE_API_KEY").ok(),
            read_timeout: Duration::from_secs(
                std::env::var("INFERENCE_READ_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
            max_attempts: std::env::var("INFERENCE_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(3),
            retry_backoff: Duration::from_millis(
                std::env::var("INFERENCE_RETRY_BACKOFF_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
            ),
        }
    }
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    params: &'a SamplingParams,
}

#[derive(Deserialize)]
struct InvokeResponse {
    generation: Option<String>,
}

/// Text generator backed by a Bedrock-style HTTP endpoint.
///
/// Timeouts, transport failures, 429 and 5xx responses are retried up to
/// `max_attempts`; every other failure is returned immediately.
pub struct BedrockTextGenerator {
    client: Client,
    url: String,
    config: InferenceConfig,
}

impl BedrockTextGenerator {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        // Bounds each wait on the socket, not the whole call
        let client = Client::builder()
            .read_timeout(config.read_timeout)
            .build()
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let url = format!(
            "{}/model/{}/invoke",
            config.endpoint.trim_end_matches('/'),
            config.model_id
        );

        tracing::info!(url = %url, attempts = config.max_attempts, "Inference client ready");

        Ok(Self {
            client,
            url,
            config,
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, InferenceError> {
        Self::new(InferenceConfig::from_env())
    }

    async fn invoke_once(&self, request: &InvokeRequest<'_>) -> Result<String, InferenceError> {
        let mut builder = self.client.post(&self.url).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InvokeResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout
            } else {
                InferenceError::InvalidResponse(e.to_string())
            }
        })?;

        parsed.generation.ok_or(InferenceError::NoGeneration)
    }
}

fn transport_error(err: reqwest::Error) -> InferenceError {
    if err.is_timeout() {
        InferenceError::Timeout
    } else {
        InferenceError::Transport(err.to_string())
    }
}

#[async_trait]
impl TextGenerator for BedrockTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &SamplingParams,
    ) -> Result<String, InferenceError> {
        let request = InvokeRequest { prompt, params };
        let mut attempt = 1;

        loop {
            match self.invoke_once(&request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < self.config.max_attempts => {
                    tracing::warn!(attempt, error = %e, "Inference attempt failed, retrying");
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(attempt, error = %e, "Inference request failed");
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INVOKE_PATH: &str = "/model/test-model/invoke";

    fn generator(server: &MockServer, api_key: Option<&str>) -> BedrockTextGenerator {
        BedrockTextGenerator::new(InferenceConfig {
            endpoint: server.uri(),
            model_id: "test-model".to_string(),
            api_key: api_key.map(String::from),
            read_timeout: Duration::from_secs(5),
            max_attempts: 3,
            retry_backoff: Duration::ZERO,
        })
        .unwrap()
    }

    fn params() -> SamplingParams {
        SamplingParams {
            max_gen_len: 400,
            temperature: 0.7,
            top_p: 0.9,
        }
    }

    #[tokio::test]
    async fn test_returns_generation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({ "prompt": "Write", "max_gen_len": 400 })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "generation": "**Hi** There.", "stop_reason": "stop" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = generator(&server, Some("secret"))
            .generate("Write", &params())
            .await
            .unwrap();

        assert_eq!(text, "**Hi** There.");
    }

    #[tokio::test]
    async fn test_missing_generation_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stop_reason": "length" })))
            .mount(&server)
            .await;

        let err = generator(&server, None)
            .generate("Write", &params())
            .await
            .unwrap_err();

        assert!(matches!(err, InferenceError::NoGeneration));
    }

    #[tokio::test]
    async fn test_retries_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generation": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let text = generator(&server, None)
            .generate("Write", &params())
            .await
            .unwrap();

        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(3)
            .mount(&server)
            .await;

        let err = generator(&server, None)
            .generate("Write", &params())
            .await
            .unwrap_err();

        assert!(matches!(err, InferenceError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad prompt"))
            .expect(1)
            .mount(&server)
            .await;

        let err = generator(&server, None)
            .generate("Write", &params())
            .await
            .unwrap_err();

        match err {
            InferenceError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad prompt");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_read_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "generation": "late" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let generator = BedrockTextGenerator::new(InferenceConfig {
            endpoint: server.uri(),
            model_id: "test-model".to_string(),
            read_timeout: Duration::from_millis(50),
            max_attempts: 1,
            retry_backoff: Duration::ZERO,
            ..Default::default()
        })
        .unwrap();

        let err = generator.generate("Write", &params()).await.unwrap_err();
        assert!(matches!(err, InferenceError::Timeout));
    }

    #[test]
    fn test_default_endpoint_targets_region() {
        let config = InferenceConfig::default();
        assert_eq!(config.endpoint, "https://bedrock-runtime.ap-south-1.amazonaws.com");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.read_timeout, Duration::from_secs(300));
    }
}
