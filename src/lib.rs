//! Tandem - Proposer/Reviewer Group Chat
//!
//! Simulates a two-agent conversation where a proposer makes suggestions and
//! a reviewer critiques them until it approves or the turn budget runs out.
//! Turn control is driven purely by parsing the agents' text.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Parse**: Result extraction plus the termination and selection classifiers
//! - **Chat**: Transcript, turn-order state machine, participants, observers
//! - **CLI**: One-shot runner, classifier checks and REPL
//!
//! # Usage
//!
//! ```rust
//! use tandem::chat::{ChatOutcome, ConciergeAgent, FrontDeskAgent, GroupChat, SilentObserver};
//!
//! let mut chat = GroupChat::new(Box::new(FrontDeskAgent), Box::new(ConciergeAgent), 10).unwrap();
//! let report = chat.run("I would like to go to Paris.", &mut SilentObserver);
//! assert_eq!(report.outcome, ChatOutcome::Terminated);
//! ```

pub mod chat;
pub mod cli;
pub mod core;
pub mod parse;

// Re-export commonly used items
pub use chat::{ChatOutcome, ChatReport, GroupChat, Transcript};
pub use cli::Repl;
pub use core::{Config, Participant, Result, TandemError};
