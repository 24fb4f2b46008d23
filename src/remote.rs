//! HTTP client for a running `viraltitle serve` instance.
//!
//! Implements [`TitleSource`] against `POST {base}/api/generate` so the
//! terminal front-end can work without holding the model credential.

use serde::Serialize;
use tracing::warn;

use crate::error::ErrorCode;
use crate::services::titles::{GenerationError, TitleCandidate, TitleSource, parse_titles};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateBody<'a> {
    topic: &'a str,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn post_generate(&self, topic: &str) -> Result<Vec<TitleCandidate>, GenerationError> {
        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateBody { topic })
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Upstream(format!("status {}: {text}", status.as_u16())));
        }

        parse_titles(Some(&text))
    }
}

#[async_trait::async_trait]
impl TitleSource for ApiClient {
    async fn generate(&self, topic: &str) -> Result<Vec<TitleCandidate>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(Vec::new());
        }

        let result = self.post_generate(topic).await;
        if let Err(e) = &result {
            warn!(code = e.error_code(), detail = e.detail(), "remote: generate failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
