//! HTTP client for the blog endpoint.

use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::Client;

use blogsmith_shared::dto::{FeedbackPayload, GenerationBody, GenerationPayload};

/// Configuration for the blog API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the blog endpoint (e.g., "http://localhost:8080/api/blog")
    pub endpoint: String,
    /// Request timeout in seconds; generation can take as long as the model does
    pub timeout_secs: u64,
}

/// Outcome of a generation request.
#[derive(Debug)]
pub enum Generation {
    Completed(GenerationBody),
    Rejected { status: u16, message: String },
}

/// HTTP client for the blog endpoint
pub struct BlogApiClient {
    client: Client,
    config: ClientConfig,
}

impl BlogApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Request a new post
    pub async fn generate(&self, payload: &GenerationPayload) -> Result<Generation> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if status == 200 {
            if let Ok(body) = serde_json::from_str::<GenerationBody>(&text) {
                return Ok(Generation::Completed(body));
            }
        }

        Ok(Generation::Rejected {
            status,
            message: decode_message(&text),
        })
    }

    /// Submit a rating for a generated post
    pub async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Failed to submit feedback: {} - {}",
                status.as_u16(),
                decode_message(&text)
            ));
        }

        Ok(())
    }
}

/// Error bodies are JSON strings; fall back to the raw text otherwise.
fn decode_message(text: &str) -> String {
    serde_json::from_str::<String>(text).unwrap_or_else(|_| text.to_string())
}
