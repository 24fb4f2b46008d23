//! Clipboard access for copying a generated title.

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

impl crate::error::ErrorCode for ClipboardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_CLIPBOARD_UNAVAILABLE",
            Self::Write(_) => "E_CLIPBOARD_WRITE",
        }
    }
}

/// Write-only clipboard seam so copy actions can be tested headless.
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the platform clipboard cannot be
    /// opened or written.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. Opened lazily on first write and kept open so the
/// copied text outlives the call on platforms that serve it from-process.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
