//! Google Generative Language API client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` with structured
//! JSON output. Pure parsing in `parse_response` for testability.

use serde::{Deserialize, Serialize};

use super::types::{LlmError, ResponseSchema};

const RESPONSE_MIME_TYPE: &str = "application/json";

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client against `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Issue one `generateContent` call and return the concatenated text parts.
    ///
    /// # Errors
    ///
    /// Transport failures map to [`LlmError::ApiRequest`], non-2xx statuses to
    /// [`LlmError::ApiResponse`], and undecodable envelopes to [`LlmError::ApiParse`].
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<Option<String>, LlmError> {
        let body = build_request(prompt, schema);
        let url = format!("{}/models/{model}:generateContent", self.base_url);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: [ApiContent<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct ApiContent<'a> {
    role: &'static str,
    parts: [ApiPart<'a>; 1],
}

#[derive(Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a ResponseSchema,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn build_request<'a>(prompt: &'a str, schema: &'a ResponseSchema) -> ApiRequest<'a> {
    ApiRequest {
        contents: [ApiContent { role: "user", parts: [ApiPart { text: prompt }] }],
        generation_config: GenerationConfig { response_mime_type: RESPONSE_MIME_TYPE, response_schema: schema },
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first candidate's text. `None` when the provider returned no
/// candidate or only empty parts.
fn parse_response(json: &str) -> Result<Option<String>, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text: String = api
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    Ok(if text.is_empty() { None } else { Some(text) })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
