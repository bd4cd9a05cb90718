//! Live mode: recompute a tool's output while text is being typed
//!
//! Every input line restarts the debounce delay, so a paste or a fast typist
//! produces one result instead of one per line. End of input flushes whatever
//! has not been shown yet.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use toolkit::case::Case;
use toolkit::Debouncer;

use crate::tools::{self, JsonAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveTool {
    Words,
    Case(Case),
    Hash,
    Json,
    Strength,
}

impl LiveTool {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "words" | "word-counter" => Some(LiveTool::Words),
            "hash" | "hash-generator" => Some(LiveTool::Hash),
            "json" | "json-formatter" => Some(LiveTool::Json),
            "strength" | "password-strength-checker" => Some(LiveTool::Strength),
            other => Case::from_str(other).map(LiveTool::Case),
        }
    }

    /// Tool output for `text`, or the tool's error message
    pub fn render(&self, text: &str) -> String {
        let result = match self {
            LiveTool::Words => tools::count_words(text, false),
            LiveTool::Case(case) => Ok(tools::convert_case(text, Some(*case))),
            LiveTool::Hash => tools::hashes(text, None),
            LiveTool::Json => tools::json(text, JsonAction::Validate),
            LiveTool::Strength => Ok(tools::check_strength(text.trim_end_matches('\n'))),
        };
        result.unwrap_or_else(|e| e.to_string())
    }
}

/// Feed `input` line by line into `tool`, calling `emit` with each debounced
/// result. Returns once input ends and the last result is out.
pub async fn run<R, E>(tool: LiveTool, input: R, delay_ms: u64, emit: E) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    E: Fn(String) + Clone + Send + Sync + 'static,
{
    let mut debouncer = Debouncer::from_millis(delay_ms);
    let shown = Arc::new(AtomicU64::new(0));
    let mut version = 0u64;
    let mut text = String::new();

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        text.push_str(&line);
        text.push('\n');
        version += 1;

        let snapshot = text.clone();
        let emit = emit.clone();
        let shown = Arc::clone(&shown);
        let this = version;
        debouncer.call(move || {
            if claim(&shown, this) {
                emit(tool.render(&snapshot));
            }
        });
    }

    // A debounced call may already be running on another worker; whichever
    // side claims the last version prints it.
    debouncer.cancel();
    if version > 0 && claim(&shown, version) {
        emit(tool.render(&text));
    }
    tracing::debug!(lines = version, "Live input ended");

    Ok(())
}

/// Mark `version` as shown. Only the first claim of a version, and no claim
/// of an older one after it, succeeds.
fn claim(shown: &AtomicU64, version: u64) -> bool {
    shown.fetch_max(version, Ordering::SeqCst) < version
}
