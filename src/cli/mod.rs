//! CLI module - command-line interface
//!
//! Contains the REPL, command parsing and the one-shot runner.

pub mod commands;
pub mod repl;
pub mod runner;

pub use repl::Repl;
pub use runner::{classify, run_chat, run_chat_with_seed, Classifier};
