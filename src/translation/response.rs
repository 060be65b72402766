use crate::utils::{Result, TranslatorError};
use serde_json::Value;
use tracing::warn;

/// Maps a raw model reply onto exactly `expected_count` strings.
///
/// Extra elements are dropped with a warning. Missing elements are an
/// `IncompleteResponse` so the whole chunk can be retried instead of
/// pairing keys with the wrong values.
pub fn parse_response(raw: &str, expected_count: usize) -> Result<Vec<String>> {
    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => extract_array(raw)?,
    };

    let elements = match parsed {
        Value::Array(elements) => elements,
        _ => return Err(TranslatorError::MalformedResponse(preview(raw))),
    };

    let mut values: Vec<String> = elements.into_iter().map(coerce_to_string).collect();

    if values.len() > expected_count {
        warn!(
            expected = expected_count,
            got = values.len(),
            "Model returned extra items, truncating"
        );
        values.truncate(expected_count);
    }

    if values.len() < expected_count {
        return Err(TranslatorError::IncompleteResponse {
            expected: expected_count,
            got: values.len(),
        });
    }

    Ok(values)
}

/// Recovers a JSON array the model wrapped in prose or code fences: the span
/// from the first `[` to the last `]`.
fn extract_array(raw: &str) -> Result<Value> {
    let start = raw.find('[');
    let end = raw.rfind(']');

    match (start, end) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str(&raw[start..=end])
                .map_err(|_| TranslatorError::MalformedResponse(preview(raw)))
        }
        _ => Err(TranslatorError::MalformedResponse(preview(raw))),
    }
}

fn coerce_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn preview(raw: &str) -> String {
    const LIMIT: usize = 200;
    match raw.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &raw[..idx]),
        None => raw.to_string(),
    }
}
