//! Selection classifier
//!
//! Picks the next speaker from a model's answer. The answer must name a
//! participant exactly (ignoring case and surrounding whitespace); any other
//! text falls back to the participant that opens each cycle.

use serde_json::Value;

use crate::core::{ModelResult, Participant};
use crate::parse::extract::{first_candidate, first_candidate_json};

/// Next speaker named by a selection result
pub fn select_next(result: Option<&ModelResult>) -> Participant {
    first_candidate(result)
        .map(|text| select_next_text(&text))
        .unwrap_or_else(Participant::default_speaker)
}

/// Next speaker named by a raw reply
pub fn select_next_text(text: &str) -> Participant {
    Participant::from_name(text).unwrap_or_else(Participant::default_speaker)
}

/// [`select_next`] over an untyped JSON result
pub fn select_next_json(result: &Value) -> Participant {
    first_candidate_json(result)
        .map(|text| select_next_text(&text))
        .unwrap_or_else(Participant::default_speaker)
}
