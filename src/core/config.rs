//! Configuration management for Tandem
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/tandem/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::error::{Result, TandemError};

/// Seed message used when none is configured
pub const DEFAULT_SEED: &str = "I would like to go to Paris.";

/// Main configuration for Tandem
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat loop configuration
    #[serde(default)]
    pub chat: ChatConfig,
    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum agent turns before the chat is exhausted
    /// Default: 10
    pub max_turns: usize,
    /// Message the synthetic user opens the chat with
    pub seed: String,
    /// Which reviewer implementation answers for the Concierge
    pub reviewer: ReviewerKind,
    /// Probability that the random reviewer approves a turn
    /// Default: 0.5
    pub approval_rate: f64,
    /// Fixed RNG seed for the random reviewer (entropy when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_turns: env::var("TANDEM_MAX_TURNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            seed: env::var("TANDEM_SEED").unwrap_or_else(|_| DEFAULT_SEED.to_string()),
            reviewer: env::var("TANDEM_REVIEWER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            approval_rate: 0.5,
            rng_seed: None,
        }
    }
}

/// Reviewer implementation selectable from config and CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewerKind {
    /// Approves once the proposal looks refined
    #[default]
    Heuristic,
    /// Approves at random with the configured rate
    Random,
    /// Never approves
    Stubborn,
}

impl fmt::Display for ReviewerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewerKind::Heuristic => write!(f, "heuristic"),
            ReviewerKind::Random => write!(f, "random"),
            ReviewerKind::Stubborn => write!(f, "stubborn"),
        }
    }
}

impl FromStr for ReviewerKind {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(ReviewerKind::Heuristic),
            "random" => Ok(ReviewerKind::Random),
            "stubborn" => Ok(ReviewerKind::Stubborn),
            other => Err(TandemError::invalid(format!(
                "unknown reviewer '{}' (expected heuristic, random or stubborn)",
                other
            ))),
        }
    }
}

/// Output rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How a finished run is written to stdout
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Live `# Agent - Name: '...'` lines
    #[default]
    Text,
    /// One JSON report after the run
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TandemError::invalid(format!(
                "unknown format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    /// Default: warn
    pub level: String,
    /// Force debug-level logging
    pub debug: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("TANDEM_LOG").unwrap_or_else(|_| "warn".to_string()),
            debug: env::var("TANDEM_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl LoggingConfig {
    /// The filter directive to fall back on
    pub fn filter(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.level
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tandem")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > config file > env vars > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from the default file only
    pub fn load_from_file() -> Result<Self> {
        Self::load_from_path(&Self::config_file())
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TandemError::config("Config file not found"));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TandemError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| TandemError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default file and return its path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file();
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    TandemError::config(format!("Failed to create config dir: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TandemError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| TandemError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Reject values the chat loop cannot use
    pub fn validate(&self) -> Result<()> {
        let rate = self.chat.approval_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(TandemError::config(format!(
                "approval_rate must be within [0, 1], got {}",
                rate
            )));
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TandemError::config(format!("Failed to serialize config: {}", e)))
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        Config::default()
            .to_toml()
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
