//! View state for the title generator front-end.
//!
//! DESIGN
//! ======
//! `ViewState` is a plain value mutated only through the transition methods
//! below, so every transition can be unit-tested without a terminal. The
//! async call itself lives in `controller`; this module only knows how to
//! enter `Loading` and how to apply the outcome.

use std::fmt::Display;

use crate::services::titles::TitleCandidate;

/// Shown when a failure carries no message of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Coarse phase derived from the view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to show: fresh session, or a success that returned no titles.
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    topic: String,
    is_loading: bool,
    results: Vec<TitleCandidate>,
    error: Option<String>,
    /// Always a valid index into `results` when set.
    active_index: Option<usize>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn results(&self) -> &[TitleCandidate] {
        &self.results
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The currently selected candidate, if any.
    #[must_use]
    pub fn active(&self) -> Option<&TitleCandidate> {
        self.active_index.and_then(|i| self.results.get(i))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.results.is_empty() {
            Phase::Idle
        } else {
            Phase::Success
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Whether a generate action would start a request right now.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.is_loading && !self.topic.trim().is_empty()
    }

    /// Enter `Loading` and return the trimmed topic to send, or `None` when
    /// the topic is blank or a request is already in flight.
    pub fn begin_generate(&mut self) -> Option<String> {
        if !self.can_generate() {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.results.clear();
        self.active_index = None;
        Some(self.topic.trim().to_string())
    }

    /// Apply the outcome of the in-flight request. Ignored (returns `false`)
    /// when nothing is loading.
    pub fn finish_generate<E: Display>(&mut self, outcome: Result<Vec<TitleCandidate>, E>) -> bool {
        if !self.is_loading {
            return false;
        }
        self.is_loading = false;
        match outcome {
            Ok(results) => {
                self.active_index = if results.is_empty() { None } else { Some(0) };
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.results.clear();
                self.active_index = None;
                self.error = Some(if message.trim().is_empty() { UNEXPECTED_ERROR_MESSAGE.to_string() } else { message });
            }
        }
        true
    }

    /// Select result `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.results.len() {
            return false;
        }
        self.active_index = Some(index);
        true
    }
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// An Enter key press and the modifiers held with it. Enter is the only key
/// the view reacts to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere.
    pub meta: bool,
}

impl KeyPress {
    /// Enter with no modifier: a newline in the topic, not a submit.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Ctrl+Enter, the accelerator a line-oriented terminal maps a submitted line to.
    #[must_use]
    pub fn submit() -> Self {
        Self { ctrl: true, meta: false }
    }

    /// Modifier+Enter (Ctrl or Meta) submits the topic; plain Enter is a newline.
    #[must_use]
    pub fn is_submit_accelerator(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
