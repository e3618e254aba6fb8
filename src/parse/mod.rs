//! Parse module - text classifiers over model output
//!
//! Turns a model result into a control signal: whether the reviewer approved,
//! and which participant should speak next. Every function here is total and
//! pure; malformed input degrades to a safe default instead of an error.

pub mod extract;
pub mod selection;
pub mod termination;

pub use extract::{first_candidate, first_candidate_json};
pub use selection::{select_next, select_next_json, select_next_text};
pub use termination::{is_approval, is_approval_json, is_approval_text, APPROVAL_TOKEN};
