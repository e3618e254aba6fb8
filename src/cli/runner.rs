//! One-shot chat runs and classifier checks
//!
//! Shared by the `tandem` binary and the REPL.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde_json::Value;

use crate::chat::{ChatOutcome, ConsoleObserver, GroupChat, SilentObserver};
use crate::core::{Config, OutputFormat, Result, TandemError};
use crate::parse::{is_approval_json, is_approval_text, select_next_json, select_next_text};

/// Run one chat with the configured seed, writing it to `out`
pub fn run_chat<W: Write>(config: &Config, out: &mut W) -> Result<ChatOutcome> {
    run_chat_with_seed(config, &config.chat.seed, out)
}

/// Run one chat from an explicit seed, writing it to `out`
pub fn run_chat_with_seed<W: Write>(
    config: &Config,
    seed: &str,
    out: &mut W,
) -> Result<ChatOutcome> {
    let mut chat = GroupChat::from_config(&config.chat);

    match config.output.format {
        OutputFormat::Text => {
            let mut console = ConsoleObserver::new(&mut *out);
            Ok(chat.run(seed, &mut console).outcome)
        }
        OutputFormat::Json => {
            let report = chat.run(seed, &mut SilentObserver);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(report.outcome)
        }
    }
}

/// Which classifier to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    Termination,
    Selection,
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classifier::Termination => write!(f, "termination"),
            Classifier::Selection => write!(f, "selection"),
        }
    }
}

impl FromStr for Classifier {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "termination" | "term" => Ok(Classifier::Termination),
            "selection" | "select" => Ok(Classifier::Selection),
            other => Err(TandemError::invalid(format!(
                "unknown classifier '{}' (expected termination or selection)",
                other
            ))),
        }
    }
}

/// Classify raw input and render the verdict.
///
/// Input that parses as JSON is read as a model result; anything else is
/// taken as the text of a single candidate.
pub fn classify(classifier: Classifier, input: &str) -> String {
    let json = serde_json::from_str::<Value>(input).ok();

    match (classifier, json) {
        (Classifier::Termination, Some(value)) => is_approval_json(&value).to_string(),
        (Classifier::Termination, None) => is_approval_text(input).to_string(),
        (Classifier::Selection, Some(value)) => select_next_json(&value).to_string(),
        (Classifier::Selection, None) => select_next_text(input).to_string(),
    }
}
