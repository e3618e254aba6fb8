//! Interactive REPL for Tandem
//!
//! Each line the user enters seeds a fresh chat.

use std::io::{self, BufRead, Write};

use crate::cli::commands::{handle_command, CommandResult};
use crate::cli::runner::run_chat_with_seed;
use crate::core::{Config, Result};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    config: Config,
}

impl Repl {
    /// Create a REPL with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the REPL on stdin/stdout
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout)
    }

    /// Run the REPL over arbitrary input and output
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        self.print_banner(out)?;

        loop {
            write!(out, "You: ")?;
            out.flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    // EOF (Ctrl+D)
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Error reading input: {}", e);
                    continue;
                }
            }

            match handle_command(&line, &mut self.config) {
                Ok(CommandResult::Exit) => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                Ok(CommandResult::Handled(output)) => {
                    writeln!(out, "{}\n", output)?;
                }
                Ok(CommandResult::None) => continue,
                Ok(CommandResult::Continue(seed)) => {
                    let outcome = run_chat_with_seed(&self.config, &seed, out)?;
                    tracing::debug!(outcome = ?outcome, "Chat finished");
                    writeln!(out)?;
                }
                Err(e) => {
                    writeln!(out, "Command error: {}\n", e)?;
                }
            }
        }

        Ok(())
    }

    /// Print the startup banner
    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Tandem - proposer/reviewer chat")?;
        writeln!(out, "Max turns:  {}", self.config.chat.max_turns)?;
        writeln!(out, "Reviewer:   {}", self.config.chat.reviewer)?;
        writeln!(out)?;
        writeln!(out, "Commands: help, status, set, classify, exit")?;
        writeln!(out, "─────────────────────────────────────────────")?;
        Ok(())
    }
}
