//! `POST /api/generate`: topic in, title candidates out.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ErrorCode;
use crate::services::titles::TitleSource;
use crate::state::AppState;

pub const TOPIC_REQUIRED: &str = "Topic is required";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const GENERATE_FAILED: &str = "Failed to generate titles.";

#[derive(Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    topic: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Pull a usable topic out of the raw body. Anything unparseable, a
/// non-string `topic`, or a blank one counts as missing.
fn extract_topic(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<GenerateRequest>(body)
        .ok()
        .and_then(|req| req.topic)
        .filter(|topic| !topic.trim().is_empty())
}

/// `POST /api/generate` with body `{ "topic": string }`, replies with the
/// candidate array or a JSON `{ "error": ... }`.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(topic) = extract_topic(&body) else {
        return error_response(StatusCode::BAD_REQUEST, TOPIC_REQUIRED);
    };

    let Some(titles) = state.titles.as_ref() else {
        warn!("generate: LLM not configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_FAILED);
    };

    match titles.generate(&topic).await {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(e) => {
            warn!(code = e.error_code(), detail = e.detail(), "generate: upstream failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_FAILED)
        }
    }
}

/// Fallback for every non-POST method on `/api/generate`.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
