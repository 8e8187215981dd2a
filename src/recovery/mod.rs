//! Recovery of structured records from noisy generated text
//!
//! Generation services routinely wrap the JSON they were asked for in prose,
//! Markdown fences, or cut it off mid-sentence. The parser here is permissive
//! about surrounding noise but strict about the extracted span: a span either
//! parses as a JSON object or the strategy moves on.

pub mod normalizer;
pub mod templates;

use crate::error::{ResumeGraderError, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static FENCED_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap());
static FENCE_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```json|```").unwrap());

/// Extract the JSON object embedded in `raw`.
///
/// Strategies are tried in order, first success wins:
/// 1. the span from the first `{` to the last `}` of the whole text;
/// 2. the inner content of a fenced code block (optionally tagged `json`);
/// 3. fence markers stripped, then the first `{` to the last `}` of the rest.
///
/// Never panics on malformed input. When no strategy yields a valid object
/// the raw text is retained in the error for diagnostics.
pub fn recover_json(raw: &str) -> Result<Value> {
    if let Some(value) = brace_span(raw).and_then(parse_object) {
        return Ok(value);
    }

    if let Some(value) = FENCED_OBJECT
        .captures(raw)
        .and_then(|caps| parse_object(caps.get(1).map_or("", |m| m.as_str())))
    {
        return Ok(value);
    }

    let stripped = FENCE_MARKERS.replace_all(raw, "");
    if let Some(value) = brace_span(&stripped).and_then(parse_object) {
        return Ok(value);
    }

    Err(ResumeGraderError::RecoveryFailed {
        raw: raw.to_string(),
    })
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn parse_object(span: &str) -> Option<Value> {
    serde_json::from_str::<Map<String, Value>>(span)
        .ok()
        .map(Value::Object)
}
