//! CLI commands
//!
//! Special commands that can be executed in the REPL.

use crate::cli::runner::{classify, Classifier};
use crate::core::{Config, OutputFormat, Result, ReviewerKind, TandemError};

/// Result of parsing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Run a chat seeded with this input
    Continue(String),
    /// Command was handled, show output
    Handled(String),
    /// Exit the REPL
    Exit,
    /// No output needed
    None,
}

/// Keys accepted by `set`
const SETTINGS: [&str; 6] = ["max_turns", "turns", "reviewer", "format", "approval_rate", "rate"];

/// Parse and handle special commands.
///
/// A line is only a command when it has the command's exact shape; any other
/// line, even one starting with a command word, seeds a chat. `say <text>`
/// always seeds.
pub fn handle_command(input: &str, config: &mut Config) -> Result<CommandResult> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(CommandResult::None);
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).map(|s| s.trim()).unwrap_or("");

    let first_arg = args.split_whitespace().next().unwrap_or("").to_lowercase();

    match cmd.as_str() {
        "say" if !args.is_empty() => Ok(CommandResult::Continue(args.to_string())),

        "exit" | "quit" | "q" if args.is_empty() => Ok(CommandResult::Exit),

        "help" | "?" if args.is_empty() => Ok(CommandResult::Handled(help_text())),

        "status" if args.is_empty() => Ok(CommandResult::Handled(status_text(config))),

        "set" if args.is_empty() || SETTINGS.contains(&first_arg.as_str()) => {
            handle_set_command(args, config)
        }

        "classify" if args.is_empty() || first_arg.parse::<Classifier>().is_ok() => {
            let parts: Vec<&str> = args.splitn(2, ' ').collect();
            let Some(input) = parts.get(1) else {
                return Ok(CommandResult::Handled(
                    "Usage: classify <termination|selection> <text or JSON result>".to_string(),
                ));
            };
            let classifier: Classifier = parts[0].parse()?;
            Ok(CommandResult::Handled(format!(
                "{}: {}",
                classifier,
                classify(classifier, input.trim())
            )))
        }

        _ => {
            if input.starts_with('/') {
                Ok(CommandResult::Handled(format!(
                    "Unknown command: {}. Type 'help' for available commands.",
                    cmd
                )))
            } else {
                Ok(CommandResult::Continue(input.to_string()))
            }
        }
    }
}

/// Handle 'set' subcommands
fn handle_set_command(args: &str, config: &mut Config) -> Result<CommandResult> {
    let parts: Vec<&str> = args.splitn(2, ' ').collect();

    if parts.is_empty() || parts[0].is_empty() {
        return Ok(CommandResult::Handled(
            "Usage: set <max_turns|reviewer|format|approval_rate> <value>\n\
             Examples:\n\
               set max_turns 6\n\
               set reviewer stubborn\n\
               set format json"
                .to_string(),
        ));
    }

    let key = parts[0].to_lowercase();
    let value = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match key.as_str() {
        "max_turns" | "turns" => {
            let turns: usize = value.parse().map_err(|_| {
                TandemError::invalid(format!("max_turns must be a whole number, got '{}'", value))
            })?;
            config.chat.max_turns = turns;
            Ok(CommandResult::Handled(format!("Max turns set to: {}", turns)))
        }

        "reviewer" => {
            let kind: ReviewerKind = value.parse()?;
            config.chat.reviewer = kind;
            Ok(CommandResult::Handled(format!("Reviewer set to: {}", kind)))
        }

        "format" => {
            let format: OutputFormat = value.parse()?;
            config.output.format = format;
            Ok(CommandResult::Handled(format!("Output format set to: {}", format)))
        }

        "approval_rate" | "rate" => {
            let rate: f64 = value.parse().map_err(|_| {
                TandemError::invalid(format!("approval_rate must be a number, got '{}'", value))
            })?;
            let mut updated = config.clone();
            updated.chat.approval_rate = rate;
            updated.validate()?;
            *config = updated;
            Ok(CommandResult::Handled(format!("Approval rate set to: {}", rate)))
        }

        _ => Ok(CommandResult::Handled(format!(
            "Unknown setting: {}. Available: max_turns, reviewer, format, approval_rate",
            key
        ))),
    }
}

fn status_text(config: &Config) -> String {
    format!(
        "Status:\n\
         ─────────────────────────────\n\
         Max turns:     {}\n\
         Reviewer:      {}\n\
         Approval rate: {}\n\
         Format:        {}",
        config.chat.max_turns,
        config.chat.reviewer,
        config.chat.approval_rate,
        config.output.format
    )
}

/// Generate help text
fn help_text() -> String {
    r#"Tandem Commands:
─────────────────────────────────────────────
  help, ?          Show this help message
  exit, quit, q    Exit Tandem
  status           Show current settings

  set max_turns <n>              Set the turn budget
  set reviewer <kind>            heuristic, random or stubborn
  set approval_rate <0..1>       Approval odds for the random reviewer
  set format <text|json>         Output format
  classify <termination|selection> <input>
                                 Run a classifier on text or a JSON result

  say <message>                  Start a chat with exactly this message

Anything else starts a new chat with that line as the user's message.
A line that merely begins with a command word ("help me plan Rome",
"set off for Lyon") is a message too; only the exact forms above
are commands.
─────────────────────────────────────────────"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_and_seed() {
        let mut config = Config::default();
        assert_eq!(handle_command("quit", &mut config).unwrap(), CommandResult::Exit);
        assert_eq!(handle_command("   ", &mut config).unwrap(), CommandResult::None);
        assert_eq!(
            handle_command("I would like to go to Rome.", &mut config).unwrap(),
            CommandResult::Continue("I would like to go to Rome.".to_string())
        );
    }

    #[test]
    fn test_set_commands() {
        let mut config = Config::default();
        handle_command("set max_turns 6", &mut config).unwrap();
        handle_command("set reviewer Stubborn", &mut config).unwrap();
        handle_command("set format json", &mut config).unwrap();

        assert_eq!(config.chat.max_turns, 6);
        assert_eq!(config.chat.reviewer, ReviewerKind::Stubborn);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_leave_config_untouched() {
        let mut config = Config::default();
        let before = config.chat.approval_rate;

        assert!(handle_command("set max_turns many", &mut config).is_err());
        assert!(handle_command("set approval_rate 3", &mut config).is_err());
        assert_eq!(config.chat.approval_rate, before);
    }

    #[test]
    fn test_classify_command() {
        let mut config = Config::default();
        assert_eq!(
            handle_command("classify termination YES", &mut config).unwrap(),
            CommandResult::Handled("termination: true".to_string())
        );
        assert_eq!(
            handle_command("classify selection {\"value\": [\"concierge\"]}", &mut config)
                .unwrap(),
            CommandResult::Handled("selection: Concierge".to_string())
        );
    }

    #[test]
    fn test_command_words_in_messages_seed_chats() {
        let mut config = Config::default();
        for line in [
            "help me plan Rome",
            "set off for Lyon",
            "status of the Louvre tickets?",
            "classify these museums for me",
            "quit smoking tours in Nice",
        ] {
            assert_eq!(
                handle_command(line, &mut config).unwrap(),
                CommandResult::Continue(line.to_string()),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_say_forces_seed() {
        let mut config = Config::default();
        assert_eq!(
            handle_command("say help", &mut config).unwrap(),
            CommandResult::Continue("help".to_string())
        );
        assert!(matches!(
            handle_command("help", &mut config).unwrap(),
            CommandResult::Handled(_)
        ));
    }

    #[test]
    fn test_unknown_slash_command() {
        let mut config = Config::default();
        match handle_command("/frobnicate", &mut config).unwrap() {
            CommandResult::Handled(msg) => assert!(msg.contains("Unknown command")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
