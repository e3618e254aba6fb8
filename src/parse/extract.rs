//! Result extraction
//!
//! Normalizes a model result into the single trimmed token the classifiers
//! look at: the first candidate.

use serde_json::Value;

use crate::core::ModelResult;

/// Trimmed first candidate of a result.
///
/// Returns `None` when the result is absent, has no candidates, or its
/// first candidate is missing.
pub fn first_candidate(result: Option<&ModelResult>) -> Option<String> {
    result?
        .value
        .first()?
        .as_deref()
        .map(|text| text.trim().to_string())
}

/// Trimmed first candidate of an untyped JSON result.
///
/// Accepts `{"value": [...]}`, a bare candidate array, or a bare string.
/// Strings, numbers and booleans yield their text form; anything else
/// (null, objects, nested arrays, a `value` that is not an array) yields
/// `None`.
pub fn first_candidate_json(result: &Value) -> Option<String> {
    let first = match result {
        Value::Object(map) => map.get("value")?.as_array()?.first()?,
        Value::Array(items) => items.first()?,
        scalar => scalar,
    };

    let text = match first {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    Some(text.trim().to_string())
}
