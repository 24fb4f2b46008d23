use super::*;
use crate::services::titles::{GenerationError, TitleCandidate};

fn state_with(titles: &[(&str, u8)]) -> ViewState {
    let mut state = ViewState::new();
    state.set_topic("topic");
    state.begin_generate();
    state.finish_generate::<GenerationError>(Ok(titles
        .iter()
        .map(|(t, s)| TitleCandidate { title: (*t).into(), ctr_score: *s, tags: None })
        .collect()));
    state
}

// =============================================================
// clamp_lines
// =============================================================

#[test]
fn clamp_short_text_is_one_line() {
    assert_eq!(clamp_lines("7 Secret Tips", 20, 2), ["7 Secret Tips"]);
}

#[test]
fn clamp_wraps_on_word_boundaries() {
    assert_eq!(clamp_lines("one two three four", 9, 3), ["one two", "three", "four"]);
}

#[test]
fn clamp_adds_ellipsis_when_cut() {
    let lines = clamp_lines("alpha beta gamma delta epsilon zeta", 11, 2);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "alpha beta");
    assert!(lines[1].ends_with('…'));
    assert!(lines.iter().all(|l| l.chars().count() <= 11));
}

#[test]
fn clamp_hard_splits_long_words() {
    let lines = clamp_lines("abcdefghij", 4, 5);
    assert_eq!(lines, ["abcd", "efgh", "ij"]);
}

#[test]
fn clamp_counts_chars_not_bytes() {
    let lines = clamp_lines("ñññ ééé", 7, 2);
    assert_eq!(lines, ["ñññ ééé"]);
}

#[test]
fn clamp_empty_text_has_no_lines() {
    assert!(clamp_lines("   ", 10, 2).is_empty());
}

// =============================================================
// render_results
// =============================================================

#[test]
fn results_empty_shows_placeholder() {
    assert_eq!(render_results(&ViewState::new()), "NO DATA GENERATED\n");
}

#[test]
fn results_loading_shows_progress() {
    let mut state = ViewState::new();
    state.set_topic("topic");
    state.begin_generate();
    assert_eq!(render_results(&state), "PROCESSING HEURISTICS...\n");
}

#[test]
fn results_list_cards_and_marks_active() {
    let mut state = state_with(&[("First", 91), ("Second", 88)]);
    state.select(1);
    let out = render_results(&state);
    assert!(out.starts_with("2 VARIANTS GENERATED\n"));
    assert!(out.contains("  Option 1  [91% CTR]\n    First\n"));
    assert!(out.contains("> Option 2  [88% CTR]\n    Second\n"));
}

#[test]
fn results_show_tags_when_present() {
    let mut state = ViewState::new();
    state.set_topic("topic");
    state.begin_generate();
    state.finish_generate::<GenerationError>(Ok(vec![TitleCandidate {
        title: "T".into(),
        ctr_score: 90,
        tags: Some(vec!["tech".into(), "apple".into()]),
    }]));
    assert!(render_results(&state).contains("    #tech #apple\n"));
}

// =============================================================
// render_error
// =============================================================

#[test]
fn error_banner_only_on_failure() {
    assert!(render_error(&ViewState::new()).is_none());

    let mut state = ViewState::new();
    state.set_topic("topic");
    state.begin_generate();
    state.finish_generate(Err(GenerationError::Transport("refused".into())));
    let banner = render_error(&state).unwrap();
    assert!(banner.contains("Generation Failed"));
    assert!(banner.contains("Failed to generate titles. Please try again later."));
    assert!(!banner.contains("refused"));
}

// =============================================================
// render_preview
// =============================================================

#[test]
fn preview_without_title_uses_placeholder() {
    let out = render_preview(None, PreviewMode::Desktop);
    assert!(out.contains("This is how your viral video title will"));
    assert!(out.contains("PREVIEW: DESKTOP SEARCH"));
}

#[test]
fn preview_desktop_has_verified_mark() {
    let out = render_preview(Some("T"), PreviewMode::Desktop);
    assert!(out.contains("ViralChannel ✓ • 1.2M views • 2 days ago"));
    assert!(out.contains("12:45"));
}

#[test]
fn preview_mobile_drops_verified_mark_and_narrows() {
    let title = "iPhone 15 Review (Must Watch) [2024] The Secret Mistake Everyone Makes Finally Exposed";
    let out = render_preview(Some(title), PreviewMode::Mobile);
    assert!(out.contains("ViralChannel • 1.2M views"));
    assert!(!out.contains('✓'));
    assert!(out.contains("PREVIEW: MOBILE FEED"));
    assert!(out.contains('…'));
}

#[test]
fn preview_mode_parses() {
    assert_eq!("mobile".parse::<PreviewMode>(), Ok(PreviewMode::Mobile));
    assert_eq!(" Desktop ".parse::<PreviewMode>(), Ok(PreviewMode::Desktop));
    assert!("tablet".parse::<PreviewMode>().is_err());
}

// =============================================================
// render
// =============================================================

#[test]
fn render_previews_active_title() {
    let mut state = state_with(&[("First", 91), ("Second", 88)]);
    state.select(1);
    let out = render(&state, PreviewMode::Desktop);
    let preview = out.split("THUMBNAIL_PREVIEW").nth(1).unwrap();
    assert!(preview.contains("  Second\n"));
    assert!(!preview.contains("  First\n"));
}
