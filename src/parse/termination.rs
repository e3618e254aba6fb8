//! Termination classifier
//!
//! The reviewer approves by answering exactly "yes". Paraphrases, partial
//! matches and anything wrapped in extra words are not approval.

use serde_json::Value;

use crate::core::ModelResult;
use crate::parse::extract::{first_candidate, first_candidate_json};

/// The only text that counts as approval, after trimming and lowercasing
pub const APPROVAL_TOKEN: &str = "yes";

/// Whether a reviewer result signals approval
pub fn is_approval(result: Option<&ModelResult>) -> bool {
    first_candidate(result).is_some_and(|text| is_approval_text(&text))
}

/// Whether a raw reply is the approval token
pub fn is_approval_text(text: &str) -> bool {
    text.trim().to_lowercase() == APPROVAL_TOKEN
}

/// [`is_approval`] over an untyped JSON result
pub fn is_approval_json(result: &Value) -> bool {
    first_candidate_json(result).is_some_and(|text| is_approval_text(&text))
}
