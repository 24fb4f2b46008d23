//! Drives [`ViewState`] transitions around the async generation call.
//!
//! The state mutex is only held for the synchronous transitions, never
//! across the network await, so selection and copy stay responsive while a
//! request is in flight. `ViewState::begin_generate` is the re-entry guard.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use super::clipboard::Clipboard;
use super::state::{KeyPress, ViewState};
use crate::error::ErrorCode;
use crate::services::titles::TitleSource;

pub struct Controller {
    state: Mutex<ViewState>,
    source: Arc<dyn TitleSource>,
}

impl Controller {
    #[must_use]
    pub fn new(source: Arc<dyn TitleSource>) -> Self {
        Self { state: Mutex::new(ViewState::new()), source }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// A copy of the current view state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.with_state(|s| s.clone())
    }

    pub fn set_topic(&self, topic: impl Into<String>) {
        let topic = topic.into();
        self.with_state(|s| s.set_topic(topic));
    }

    /// Run one generate action. Returns `false` without side effects when the
    /// topic is blank or another request is still loading.
    pub async fn on_generate(&self) -> bool {
        let Some(topic) = self.with_state(ViewState::begin_generate) else {
            debug!("view: generate ignored");
            return false;
        };

        let outcome = self.source.generate(&topic).await;
        self.with_state(|s| s.finish_generate(outcome));
        true
    }

    pub fn on_select(&self, index: usize) -> bool {
        self.with_state(|s| s.select(index))
    }

    /// Route a key press; the submit accelerator triggers [`Self::on_generate`].
    pub async fn on_key(&self, key: KeyPress) -> bool {
        if key.is_submit_accelerator() {
            self.on_generate().await
        } else {
            false
        }
    }

    /// Copy the title of result `index`. Returns `false` when there is no
    /// such result. Clipboard failures are logged, never reported back to
    /// the view.
    pub fn copy_title(&self, index: usize, clipboard: &mut dyn Clipboard) -> bool {
        let Some(title) = self.with_state(|s| s.results().get(index).map(|c| c.title.clone())) else {
            return false;
        };
        if let Err(e) = clipboard.write_text(&title) {
            warn!(code = e.error_code(), error = %e, "view: copy failed");
        }
        true
    }

    /// Copy the currently selected title, if any.
    pub fn copy_active(&self, clipboard: &mut dyn Clipboard) -> bool {
        self.with_state(|s| s.active_index()).is_some_and(|index| self.copy_title(index, clipboard))
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
