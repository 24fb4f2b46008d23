//! Terminal front-end for the view controller.
//!
//! `generate` runs one action and prints the screen; `interactive` reads
//! lines from stdin. A submitted line is the topic plus the submit
//! accelerator, and `/`-prefixed lines are commands.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::view::clipboard::Clipboard;
use crate::view::controller::Controller;
use crate::view::render::{PreviewMode, render};
use crate::view::state::KeyPress;

const HELP: &str = "\
Type a video topic and press Enter to generate titles.
  /select N          preview option N
  /copy [N]          copy option N (default: the previewed one)
  /preview MODE      desktop | mobile
  /show              redraw
  /quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Submit(String),
    /// Zero-based result index.
    Select(usize),
    /// Zero-based result index; `None` copies the active result.
    Copy(Option<usize>),
    Preview(PreviewMode),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Option numbers are one-based on screen.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Submit(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let option_index = |raw: &str| raw.parse::<usize>().ok().and_then(|n| n.checked_sub(1));

    match (name, arg) {
        ("select", Some(raw)) => option_index(raw).map_or_else(|| Command::Unknown(line.to_string()), Command::Select),
        ("copy", None) => Command::Copy(None),
        ("copy", Some(raw)) => {
            option_index(raw).map_or_else(|| Command::Unknown(line.to_string()), |i| Command::Copy(Some(i)))
        }
        ("preview", Some(raw)) => raw.parse().map_or_else(|_| Command::Unknown(line.to_string()), Command::Preview),
        ("show", None) => Command::Show,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Run one generate action for `topic` and print the result. Returns
/// `false` when the action failed or was not issued.
pub async fn run_once(controller: &Controller, topic: &str, mode: PreviewMode, json: bool) -> bool {
    controller.set_topic(topic);
    if !controller.on_key(KeyPress::submit()).await {
        eprintln!("Enter a topic to generate titles.");
        return false;
    }

    let state = controller.snapshot();
    if json && state.error().is_none() {
        match serde_json::to_string_pretty(state.results()) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("failed to encode results: {e}");
                return false;
            }
        }
    } else {
        print!("{}", render(&state, mode));
    }
    state.error().is_none()
}

/// Line-oriented session over stdin. Generation runs on a spawned task so
/// selection and copy keep working while a request is loading.
///
/// # Errors
///
/// Returns an I/O error if stdin cannot be read.
pub async fn run_interactive(
    controller: Arc<Controller>,
    clipboard: &mut dyn Clipboard,
    mode: PreviewMode,
) -> std::io::Result<()> {
    run_session(BufReader::new(tokio::io::stdin()), controller, clipboard, mode).await
}

/// Drive the session from any line source. Returns once input ends or
/// `/quit` is read, after the pending generation (if any) has finished.
///
/// # Errors
///
/// Returns an I/O error if `input` cannot be read.
pub async fn run_session<R: AsyncBufRead + Unpin>(
    input: R,
    controller: Arc<Controller>,
    clipboard: &mut dyn Clipboard,
    mut mode: PreviewMode,
) -> std::io::Result<()> {
    println!("{HELP}\n");
    print!("{}", render(&controller.snapshot(), mode));

    let mut pending: Option<JoinHandle<()>> = None;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Empty => {}
            Command::Submit(topic) => {
                if controller.snapshot().is_loading() {
                    println!("A generation is already running.");
                    continue;
                }
                controller.set_topic(topic);
                println!("PROCESSING HEURISTICS...");
                let ctl = controller.clone();
                pending = Some(tokio::spawn(async move {
                    if ctl.on_key(KeyPress::submit()).await {
                        print!("{}", render(&ctl.snapshot(), mode));
                    }
                }));
            }
            Command::Select(index) => {
                if controller.on_select(index) {
                    print!("{}", render(&controller.snapshot(), mode));
                } else {
                    println!("No option {}.", index + 1);
                }
            }
            Command::Copy(index) => {
                let copied = match index {
                    Some(i) => controller.copy_title(i, clipboard),
                    None => controller.copy_active(clipboard),
                };
                if copied {
                    println!("Copied.");
                } else {
                    println!("Nothing to copy.");
                }
            }
            Command::Preview(new_mode) => {
                mode = new_mode;
                print!("{}", render(&controller.snapshot(), mode));
            }
            Command::Show => print!("{}", render(&controller.snapshot(), mode)),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(raw) => println!("Unknown command: {raw} (try /help)"),
        }
    }

    if let Some(task) = pending.take()
        && let Err(e) = task.await
    {
        warn!(error = %e, "terminal: generation task failed");
    }
    Ok(())
}

#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;
