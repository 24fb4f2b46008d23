//! LLM: structured-output adapter for the generative text service.
//!
//! DESIGN
//! ======
//! Uses environment variables instead of config files. `LlmClient` owns the
//! configured model name and forwards to the Generative Language API client.
//! Callers depend on the [`StructuredChat`] trait so tests can substitute a
//! mock.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::StructuredChat;
use types::{LlmError, ResponseSchema};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client, configured from environment variables by
/// [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `LLM_API_KEY_ENV`: name of env var holding the API key (default `API_KEY`)
    /// - `LLM_MODEL`: model name (e.g. "gemini-3-flash-preview")
    /// - `LLM_BASE_URL`: custom base URL for a compatible endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-3-flash-preview"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl StructuredChat for LlmClient {
    async fn generate_json(&self, prompt: &str, schema: &ResponseSchema) -> Result<Option<String>, LlmError> {
        self.inner.generate(&self.model, prompt, schema).await
    }
}
