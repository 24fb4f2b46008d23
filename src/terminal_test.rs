use std::time::Duration;

use super::*;
use crate::services::titles::{GenerationError, TitleCandidate, TitleSource};
use crate::view::clipboard::ClipboardError;

struct FixedSource(Result<Vec<TitleCandidate>, ()>);

#[async_trait::async_trait]
impl TitleSource for FixedSource {
    async fn generate(&self, _topic: &str) -> Result<Vec<TitleCandidate>, GenerationError> {
        self.0.clone().map_err(|()| GenerationError::Upstream("status 500".into()))
    }
}

/// Answers after a delay, like a slow upstream.
struct SlowSource;

#[async_trait::async_trait]
impl TitleSource for SlowSource {
    async fn generate(&self, topic: &str) -> Result<Vec<TitleCandidate>, GenerationError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(vec![TitleCandidate { title: format!("{topic} (Must Watch)"), ctr_score: 92, tags: None }])
    }
}

#[derive(Default)]
struct RecordingClipboard {
    written: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.written.push(text.to_string());
        Ok(())
    }
}

fn controller(result: Result<Vec<TitleCandidate>, ()>) -> Controller {
    Controller::new(Arc::new(FixedSource(result)))
}

// =========================================================================
// parse_command
// =========================================================================

#[test]
fn plain_text_submits_trimmed_topic() {
    assert_eq!(parse_command("  How to cook steak \n"), Command::Submit("How to cook steak".into()));
    assert_eq!(parse_command("   "), Command::Empty);
}

#[test]
fn select_and_copy_are_one_based() {
    assert_eq!(parse_command("/select 1"), Command::Select(0));
    assert_eq!(parse_command("/copy 3"), Command::Copy(Some(2)));
    assert_eq!(parse_command("/copy"), Command::Copy(None));
}

#[test]
fn select_zero_or_garbage_is_unknown() {
    assert!(matches!(parse_command("/select 0"), Command::Unknown(_)));
    assert!(matches!(parse_command("/select two"), Command::Unknown(_)));
    assert!(matches!(parse_command("/select"), Command::Unknown(_)));
}

#[test]
fn preview_mode_command() {
    assert_eq!(parse_command("/preview mobile"), Command::Preview(PreviewMode::Mobile));
    assert!(matches!(parse_command("/preview tv"), Command::Unknown(_)));
}

#[test]
fn simple_commands() {
    assert_eq!(parse_command("/show"), Command::Show);
    assert_eq!(parse_command("/help"), Command::Help);
    assert_eq!(parse_command("/quit"), Command::Quit);
    assert_eq!(parse_command("/exit"), Command::Quit);
    assert_eq!(parse_command("/dance"), Command::Unknown("/dance".into()));
}

// =========================================================================
// run_once
// =========================================================================

#[tokio::test]
async fn run_once_success() {
    let ctl = controller(Ok(vec![TitleCandidate { title: "A".into(), ctr_score: 90, tags: None }]));
    assert!(run_once(&ctl, "topic", PreviewMode::Desktop, false).await);
    assert_eq!(ctl.snapshot().active_index(), Some(0));
}

#[tokio::test]
async fn run_once_failure_reports_false() {
    let ctl = controller(Err(()));
    assert!(!run_once(&ctl, "topic", PreviewMode::Desktop, true).await);
    assert!(ctl.snapshot().error().is_some());
}

#[tokio::test]
async fn run_once_blank_topic_is_not_issued() {
    let ctl = controller(Ok(Vec::new()));
    assert!(!run_once(&ctl, "  ", PreviewMode::Mobile, false).await);
    assert!(ctl.snapshot().error().is_none());
}

// =========================================================================
// run_session
// =========================================================================

#[tokio::test]
async fn input_end_waits_for_pending_generation() {
    let ctl = Arc::new(Controller::new(Arc::new(SlowSource)));
    let mut clipboard = RecordingClipboard::default();

    run_session(&b"iPhone 15 Review\n"[..], ctl.clone(), &mut clipboard, PreviewMode::Desktop).await.unwrap();

    let state = ctl.snapshot();
    assert!(!state.is_loading());
    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results()[0].title, "iPhone 15 Review (Must Watch)");
}

#[tokio::test]
async fn quit_waits_for_pending_generation() {
    let ctl = Arc::new(Controller::new(Arc::new(SlowSource)));
    let mut clipboard = RecordingClipboard::default();

    run_session(&b"topic\n/quit\nignored\n"[..], ctl.clone(), &mut clipboard, PreviewMode::Mobile).await.unwrap();

    assert_eq!(ctl.snapshot().topic(), "topic");
    assert_eq!(ctl.snapshot().results().len(), 1);
}

#[tokio::test]
async fn copy_without_results_writes_nothing() {
    let ctl = Arc::new(controller(Ok(Vec::new())));
    let mut clipboard = RecordingClipboard::default();

    run_session(&b"/copy\n/copy 9\n"[..], ctl, &mut clipboard, PreviewMode::Desktop).await.unwrap();
    assert!(clipboard.written.is_empty());
}

#[tokio::test]
async fn copy_after_generation_writes_title() {
    let ctl = Arc::new(controller(Ok(vec![TitleCandidate { title: "A".into(), ctr_score: 90, tags: None }])));
    ctl.set_topic("topic");
    assert!(ctl.on_generate().await);
    let mut clipboard = RecordingClipboard::default();

    run_session(&b"/copy 1\n"[..], ctl, &mut clipboard, PreviewMode::Desktop).await.unwrap();
    assert_eq!(clipboard.written, ["A"]);
}
