//! Chat observers
//!
//! Observers are told about every appended utterance and the final outcome.
//! They are fire-and-forget: nothing they do feeds back into the chat.

use std::io::Write;

use crate::chat::controller::ChatOutcome;
use crate::core::{Author, Utterance};

/// Receives chat events as they happen
pub trait Observer {
    fn on_utterance(&mut self, utterance: &Utterance);

    fn on_outcome(&mut self, outcome: &ChatOutcome);
}

/// Prints the transcript line by line
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One transcript line as the console shows it
pub fn format_utterance(utterance: &Utterance) -> String {
    match utterance.author() {
        Author::User => format!("# User: '{}'", utterance.content()),
        Author::Agent(p) => format!("# Agent - {}: '{}'", p, utterance.content()),
    }
}

/// The closing line for an outcome
pub fn format_outcome(outcome: &ChatOutcome) -> &'static str {
    match outcome {
        ChatOutcome::Terminated => "# IS COMPLETE: True",
        ChatOutcome::Exhausted => "# IS COMPLETE: False (max turns reached)",
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_utterance(&mut self, utterance: &Utterance) {
        // Reporting must never fail the chat
        let _ = writeln!(self.out, "{}", format_utterance(utterance));
    }

    fn on_outcome(&mut self, outcome: &ChatOutcome) {
        let _ = writeln!(self.out, "{}", format_outcome(outcome));
        let _ = self.out.flush();
    }
}

/// Event recorded by [`CaptureObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Utterance(Utterance),
    Outcome(ChatOutcome),
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct CaptureObserver {
    pub events: Vec<ChatEvent>,
}

impl CaptureObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utterances(&self) -> Vec<&Utterance> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ChatEvent::Utterance(u) => Some(u),
                ChatEvent::Outcome(_) => None,
            })
            .collect()
    }

    pub fn outcome(&self) -> Option<ChatOutcome> {
        self.events.iter().rev().find_map(|e| match e {
            ChatEvent::Outcome(o) => Some(*o),
            ChatEvent::Utterance(_) => None,
        })
    }
}

impl Observer for CaptureObserver {
    fn on_utterance(&mut self, utterance: &Utterance) {
        self.events.push(ChatEvent::Utterance(utterance.clone()));
    }

    fn on_outcome(&mut self, outcome: &ChatOutcome) {
        self.events.push(ChatEvent::Outcome(*outcome));
    }
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn on_utterance(&mut self, _utterance: &Utterance) {}

    fn on_outcome(&mut self, _outcome: &ChatOutcome) {}
}
