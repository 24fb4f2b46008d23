//! Title generation: topic → prompt → structured LLM call → candidates.
//!
//! DESIGN
//! ======
//! The prompt template and output schema are fixed. The stylistic rules in
//! the prompt (bracketed qualifiers, power words, odd-number hooks) are
//! instructions to the model only; the response is validated against the
//! schema and nothing else. Every failure past validation collapses into a
//! single user-facing [`GenerationError`] message, while the variant and its
//! detail go to the log.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::llm::StructuredChat;
use crate::llm::types::{LlmError, ResponseSchema};

/// Message shown to the user for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate titles. Please try again later.";

/// Number of titles the prompt asks for. Not enforced on the response.
pub const REQUESTED_TITLES: usize = 5;

/// Upper bound of a valid `ctrScore`. The 85..=99 band the prompt asks for is
/// advisory; only the 0..=100 range is enforced.
pub const MAX_CTR_SCORE: u8 = 100;

// =============================================================================
// TYPES
// =============================================================================

/// One generated title plus the model's estimated click-through score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCandidate {
    pub title: String,
    /// In 0..=100. Expected in 85..=99 by the prompt; advisory only.
    pub ctr_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The service could not be reached or the HTTP exchange broke.
    #[error("Failed to generate titles. Please try again later.")]
    Transport(String),
    /// The service answered, but with a failure status or an unusable payload.
    #[error("Failed to generate titles. Please try again later.")]
    Upstream(String),
}

impl GenerationError {
    /// Diagnostic detail for logs. Never shown to the user.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport(detail) | Self::Upstream(detail) => detail,
        }
    }
}

impl ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Upstream(_) => "E_UPSTREAM",
        }
    }

    fn retryable(&self) -> bool {
        true
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::ApiRequest(_) | LlmError::HttpClientBuild(_) => Self::Transport(err.to_string()),
            LlmError::ApiResponse { status, ref body } => Self::Upstream(format!("status {status}: {body}")),
            LlmError::ApiParse(_) | LlmError::ConfigParse(_) | LlmError::MissingApiKey { .. } => {
                Self::Upstream(err.to_string())
            }
        }
    }
}

// =============================================================================
// TITLE SOURCE TRAIT
// =============================================================================

/// Anything that can turn a topic into title candidates. Implemented by the
/// direct [`TitleGenerator`] and by the HTTP client for `/api/generate`.
#[async_trait::async_trait]
pub trait TitleSource: Send + Sync {
    /// Generate candidates for `topic`. A blank topic yields an empty list
    /// without any network call.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on any transport or upstream failure.
    async fn generate(&self, topic: &str) -> Result<Vec<TitleCandidate>, GenerationError>;
}

// =============================================================================
// PROMPT + SCHEMA
// =============================================================================

/// Build the fixed instruction for `topic`.
#[must_use]
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Generate {REQUESTED_TITLES} high-converting, viral YouTube titles for the topic: \"{topic}\".\n\
         \n\
         CRITICAL SEO RULES:\n\
         1. Brackets/Parentheses: MUST include [Year], (Must Watch), [Step-by-Step], or similar in at least 3 titles.\n\
         2. Power Words: Use words like \"Insane\", \"Secret\", \"Mistake\", \"Finally\", \"Exposed\".\n\
         3. CTR Hooks: Front-load keywords. Use odd numbers (e.g., \"7 Tips\").\n\
         4. Make them distinct from each other.\n\
         \n\
         Output JSON format only."
    )
}

/// The declared output schema: `[{ title: string, ctrScore: integer }]`.
#[must_use]
pub fn title_schema() -> ResponseSchema {
    ResponseSchema::array_of(ResponseSchema::object(vec![
        ("title", ResponseSchema::string("The generated YouTube title")),
        ("ctrScore", ResponseSchema::integer("Estimated CTR potential score between 85 and 99")),
    ]))
}

/// Parse the raw model text into candidates, enforcing the schema.
///
/// # Errors
///
/// Returns [`GenerationError::Upstream`] when the text is absent, blank, not
/// a JSON array of `{title, ctrScore}` objects, contains a blank title, or
/// carries a `ctrScore` outside 0..=100.
pub fn parse_titles(raw: Option<&str>) -> Result<Vec<TitleCandidate>, GenerationError> {
    let Some(text) = raw.filter(|t| !t.trim().is_empty()) else {
        return Err(GenerationError::Upstream("no data returned from model".into()));
    };

    let candidates: Vec<TitleCandidate> =
        serde_json::from_str(text).map_err(|e| GenerationError::Upstream(format!("schema violation: {e}")))?;

    if let Some(pos) = candidates.iter().position(|c| c.title.trim().is_empty()) {
        return Err(GenerationError::Upstream(format!("schema violation: empty title at index {pos}")));
    }

    if let Some(pos) = candidates.iter().position(|c| c.ctr_score > MAX_CTR_SCORE) {
        return Err(GenerationError::Upstream(format!("schema violation: ctrScore out of range at index {pos}")));
    }

    Ok(candidates)
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Direct generation client. Stateless apart from the shared LLM handle.
#[derive(Clone)]
pub struct TitleGenerator {
    llm: Arc<dyn StructuredChat>,
    schema: Arc<ResponseSchema>,
}

impl TitleGenerator {
    #[must_use]
    pub fn new(llm: Arc<dyn StructuredChat>) -> Self {
        Self { llm, schema: Arc::new(title_schema()) }
    }
}

#[async_trait::async_trait]
impl TitleSource for TitleGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<TitleCandidate>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(Vec::new());
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, topic_len = topic.len(), "titles: generation requested");

        let prompt = build_prompt(topic);
        let result = match self.llm.generate_json(&prompt, &self.schema).await {
            Ok(raw) => parse_titles(raw.as_deref()),
            Err(e) => Err(GenerationError::from(e)),
        };

        match &result {
            Ok(candidates) => info!(%request_id, count = candidates.len(), "titles: generation complete"),
            Err(e) => warn!(%request_id, code = e.error_code(), detail = e.detail(), "titles: generation failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "titles_test.rs"]
mod tests;
