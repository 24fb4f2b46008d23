//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional title generator; `None` means no model credential was
//! configured and generation requests fail with a 500.

use std::sync::Arc;

use crate::llm::StructuredChat;
use crate::services::titles::TitleGenerator;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the generator is a cheap `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    /// `None` if LLM env vars are not configured.
    pub titles: Option<TitleGenerator>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn StructuredChat>>) -> Self {
        Self { titles: llm.map(TitleGenerator::new) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_llm_has_no_generator() {
        assert!(test_helpers::test_app_state().titles.is_none());
    }

    #[test]
    fn new_with_llm_builds_generator() {
        let state = test_helpers::test_app_state_with_llm(test_helpers::MockLlm::returning("[]"));
        assert!(state.titles.is_some());
    }
}
