use serde_json::{Map, Value};
use crate::models::AgentOutcome;

/// A JSON object recovered from an agent response
pub type ParsedObject = Map<String, Value>;

/// One attempt at recovering a JSON object from the agent's `result` field.
///
/// Strategies are pure and return `None` when they do not apply.
pub type ParseStrategy = fn(&Value) -> Option<ParsedObject>;

/// Strategies tried in order; the first hit wins.
pub const PARSE_CASCADE: &[(&str, ParseStrategy)] = &[
    ("direct_object", direct_object),
    ("strict_json", strict_json),
    ("brace_span", brace_span),
];

/// Recover the structured payload of an agent outcome
///
/// Returns `None` when the outcome is a failure, carries no `result`, or
/// none of the parse strategies yields a JSON object. Never panics.
pub fn normalize_outcome(outcome: &AgentOutcome) -> Option<ParsedObject> {
    let raw = outcome.result()?;
    extract_object(raw)
}

/// Run the parse cascade over a raw `result` value
pub fn extract_object(raw: &Value) -> Option<ParsedObject> {
    for (name, strategy) in PARSE_CASCADE {
        if let Some(parsed) = strategy(raw) {
            tracing::debug!("Recovered agent payload via {} ({} keys)", name, parsed.len());
            return Some(parsed);
        }
    }

    tracing::debug!("No parse strategy recovered an object from {}", value_kind(raw));
    None
}

/// Stage 1: the transport already decoded the result into an object
pub fn direct_object(raw: &Value) -> Option<ParsedObject> {
    raw.as_object().cloned()
}

/// Stage 2: the whole string is a JSON object
///
/// A string that is valid JSON but not an object is not accepted here.
/// It falls through to brace salvage, so `[{"vibe_name":"Listed"}]`
/// yields the inner object rather than an empty one.
pub fn strict_json(raw: &Value) -> Option<ParsedObject> {
    let text = raw.as_str()?;
    parse_object(text)
}

/// Stage 3: salvage the span from the first `{` to the last `}`
///
/// Covers JSON wrapped in prose or markdown fences. No grammar repair
/// is attempted beyond cutting the span out.
pub fn brace_span(raw: &Value) -> Option<ParsedObject> {
    let text = raw.as_str()?;
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_object(&text[start..=end])
}

#[inline]
fn parse_object(text: &str) -> Option<ParsedObject> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
