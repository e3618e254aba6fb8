//! Tandem - Proposer/Reviewer Group Chat
//!
//! Main entry point for the CLI application.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tandem::cli::{classify, run_chat, Classifier};
use tandem::core::{OutputFormat, ReviewerKind};
use tandem::{Config, Repl};
use tracing_subscriber::EnvFilter;

/// Tandem - Proposer/Reviewer Group Chat
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: ~/.config/tandem/config.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Maximum agent turns before giving up
    #[arg(long, short = 'm', global = true)]
    max_turns: Option<usize>,

    /// Opening message from the user
    #[arg(long, short = 's', global = true)]
    seed: Option<String>,

    /// Reviewer implementation: heuristic, random or stubborn
    #[arg(long, short = 'r', global = true)]
    reviewer: Option<ReviewerKind>,

    /// Approval probability for the random reviewer
    #[arg(long, global = true)]
    approval_rate: Option<f64>,

    /// Fixed seed for the random reviewer
    #[arg(long, global = true)]
    rng_seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Start an interactive session
    #[arg(long, short = 'i')]
    interactive: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one chat (default)
    Run,
    /// Apply a classifier to text or a JSON model result
    Classify {
        /// termination or selection
        classifier: Classifier,
        /// Reply text, or a JSON result such as '{"value": ["yes"]}'
        input: String,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init,
    /// Print the config file location
    Path,
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            Config::load_from_path(path)?
        }
        None => Config::load(),
    };

    // Apply CLI overrides
    if let Some(max_turns) = args.max_turns {
        config.chat.max_turns = max_turns;
    }

    if let Some(ref seed) = args.seed {
        config.chat.seed = seed.clone();
    }

    if let Some(reviewer) = args.reviewer {
        config.chat.reviewer = reviewer;
    }

    if let Some(rate) = args.approval_rate {
        config.chat.approval_rate = rate;
    }

    if args.rng_seed.is_some() {
        config.chat.rng_seed = args.rng_seed;
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    if args.debug {
        config.logging.debug = true;
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = build_config(&args)?;
    init_tracing(&config);

    match args.command {
        Some(Command::Classify { classifier, input }) => {
            println!("{}", classify(classifier, &input));
            Ok(ExitCode::SUCCESS)
        }

        Some(Command::Config { action }) => {
            match action {
                ConfigAction::Show => print!("{}", config.to_toml()?),
                ConfigAction::Init => {
                    if Config::config_exists() {
                        anyhow::bail!(
                            "Config file already exists at {}",
                            Config::config_file().display()
                        );
                    }
                    let path = Config::default().save()?;
                    println!("Wrote {}", path.display());
                }
                ConfigAction::Path => println!("{}", Config::config_file().display()),
            }
            Ok(ExitCode::SUCCESS)
        }

        Some(Command::Run) | None if args.interactive => {
            let mut repl = Repl::with_config(config);
            repl.run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some(Command::Run) | None => {
            let mut stdout = io::stdout();
            let outcome = run_chat(&config, &mut stdout)?;
            Ok(ExitCode::from(outcome.exit_code() as u8))
        }
    }
}
