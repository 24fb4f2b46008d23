//! Plain-text rendering of the view state.
//!
//! Pure functions of [`ViewState`] and [`PreviewMode`]; the terminal front-end
//! prints whatever these return.

use std::fmt::Write;

use super::state::ViewState;

pub const PLACEHOLDER_TITLE: &str = "This is how your viral video title will look on YouTube";
const CHANNEL_NAME: &str = "ViralChannel";
const VIEW_COUNT: &str = "1.2M views";
const UPLOADED: &str = "2 days ago";
const DURATION: &str = "12:45";
const TITLE_MAX_LINES: usize = 2;
const ELLIPSIS: char = '…';

/// Which video-platform layout the preview imitates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    #[default]
    Desktop,
    Mobile,
}

impl PreviewMode {
    /// Title column width in characters.
    #[must_use]
    pub fn title_width(self) -> usize {
        match self {
            Self::Desktop => 48,
            Self::Mobile => 32,
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Desktop => "PREVIEW: DESKTOP SEARCH",
            Self::Mobile => "PREVIEW: MOBILE FEED",
        }
    }
}

impl std::str::FromStr for PreviewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown preview mode '{other}' (expected 'desktop' or 'mobile')")),
        }
    }
}

// =============================================================================
// LINE CLAMP
// =============================================================================

/// Word-wrap `text` to `width` characters and keep at most `max_lines`,
/// ending the last kept line with an ellipsis when anything was cut.
#[must_use]
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(2);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        // Hard-split words that can never fit on one line.
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let current_len = current.chars().count();
        if current.is_empty() {
            current.extend(word);
        } else if current_len + 1 + word.len() <= width {
            current.push(' ');
            current.extend(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.extend(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width - 1).collect();
            *last = format!("{}{ELLIPSIS}", kept.trim_end());
        }
    }
    lines
}

// =============================================================================
// SECTIONS
// =============================================================================

/// The result list, or the loading / empty placeholder.
#[must_use]
pub fn render_results(state: &ViewState) -> String {
    let mut out = String::new();
    if state.is_loading() {
        out.push_str("PROCESSING HEURISTICS...\n");
        return out;
    }
    if state.results().is_empty() {
        out.push_str("NO DATA GENERATED\n");
        return out;
    }

    let _ = writeln!(out, "{} VARIANTS GENERATED", state.results().len());
    for (i, candidate) in state.results().iter().enumerate() {
        let marker = if state.active_index() == Some(i) { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} Option {}  [{}% CTR]", i + 1, candidate.ctr_score);
        let _ = writeln!(out, "    {}", candidate.title);
        if let Some(tags) = candidate.tags.as_ref().filter(|t| !t.is_empty()) {
            let _ = writeln!(out, "    #{}", tags.join(" #"));
        }
    }
    out
}

/// The failure banner, present only in the `Failure` phase.
#[must_use]
pub fn render_error(state: &ViewState) -> Option<String> {
    state.error().map(|message| format!("! Generation Failed\n  {message}\n"))
}

/// The mock video card showing `title` (or the placeholder).
#[must_use]
pub fn render_preview(title: Option<&str>, mode: PreviewMode) -> String {
    let title = title.unwrap_or(PLACEHOLDER_TITLE);
    let width = mode.title_width();
    let mut out = String::new();

    let _ = writeln!(out, "+{}+", "-".repeat(width + 2));
    let _ = writeln!(out, "| {:<width$} |", "THUMBNAIL_PREVIEW");
    let _ = writeln!(out, "| {DURATION:>width$} |");
    let _ = writeln!(out, "+{}+", "-".repeat(width + 2));

    for line in clamp_lines(title, width, TITLE_MAX_LINES) {
        let _ = writeln!(out, "  {line}");
    }
    match mode {
        PreviewMode::Desktop => {
            let _ = writeln!(out, "  {CHANNEL_NAME} ✓ • {VIEW_COUNT} • {UPLOADED}");
        }
        PreviewMode::Mobile => {
            let _ = writeln!(out, "  {CHANNEL_NAME} • {VIEW_COUNT} • {UPLOADED}");
        }
    }
    let _ = writeln!(out, "  {}", mode.caption());
    out
}

/// The whole screen: banner, result list, preview.
#[must_use]
pub fn render(state: &ViewState, mode: PreviewMode) -> String {
    let mut out = String::new();
    if let Some(banner) = render_error(state) {
        out.push_str(&banner);
        out.push('\n');
    }
    out.push_str(&render_results(state));
    out.push('\n');
    out.push_str(&render_preview(state.active().map(|c| c.title.as_str()), mode));
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
