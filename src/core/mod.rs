//! Core module - shared infrastructure for Tandem
//!
//! This module contains foundational types, configuration, and error handling
//! used throughout the application.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, OutputFormat, ReviewerKind};
pub use error::{Result, TandemError};
pub use types::*;
