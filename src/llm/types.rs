//! LLM types: structured-output request types and errors.
//!
//! The generative service is asked for a single JSON document matching a
//! declared schema. These types are the provider-facing half of that
//! exchange; the title-specific half lives in `services::titles`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// RESPONSE SCHEMA
// =============================================================================

/// Primitive schema types understood by the structured-output endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Array,
    Object,
    String,
    Integer,
}

/// A declared output schema, serialized in the provider's OpenAPI subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl ResponseSchema {
    fn leaf(kind: SchemaType, description: &str) -> Self {
        Self { kind, description: Some(description.to_string()), items: None, properties: None, required: None }
    }

    #[must_use]
    pub fn string(description: &str) -> Self {
        Self::leaf(SchemaType::String, description)
    }

    #[must_use]
    pub fn integer(description: &str) -> Self {
        Self::leaf(SchemaType::Integer, description)
    }

    #[must_use]
    pub fn array_of(items: ResponseSchema) -> Self {
        Self { kind: SchemaType::Array, description: None, items: Some(Box::new(items)), properties: None, required: None }
    }

    /// An object whose every listed property is required.
    #[must_use]
    pub fn object(properties: Vec<(&str, ResponseSchema)>) -> Self {
        let required = properties.iter().map(|(name, _)| (*name).to_string()).collect();
        let properties = properties
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();
        Self {
            kind: SchemaType::Object,
            description: None,
            items: None,
            properties: Some(properties),
            required: Some(required),
        }
    }
}

// =============================================================================
// STRUCTURED CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for one-shot structured generation.
/// Enables mocking in tests.
#[async_trait::async_trait]
pub trait StructuredChat: Send + Sync {
    /// Send `prompt` with the declared `schema` and return the raw response
    /// text. `Ok(None)` means the provider answered but returned no text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider answers with
    /// a non-success status, or the envelope is malformed.
    async fn generate_json(&self, prompt: &str, schema: &ResponseSchema) -> Result<Option<String>, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
