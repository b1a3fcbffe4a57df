//! Best-effort recovery of a JSON object from model output.
//!
//! Models wrap their JSON in prose or markdown fences often enough that a
//! plain `serde_json::from_str` is not sufficient. Each strategy below looks
//! at the text a different way; [`extract_json`] runs them in order and the
//! first one that yields a JSON object wins. None of them balance braces:
//! nested objects survive only because the brace patterns are greedy.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

lazy_static! {
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"(?s)```(?i:jsonc?)?[ \t]*\r?\n?(.*?)```").unwrap();
    static ref GREEDY_BRACES: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

pub type Strategy = fn(&str) -> Option<Value>;

/// Extraction strategies in the order they are attempted.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("whole_text", whole_text),
    ("fenced_block", fenced_block),
    ("greedy_brace_scan", greedy_brace_scan),
    ("outermost_brace", outermost_brace),
];

/// Parse `text` with the first strategy that produces a JSON object.
pub fn extract_json(text: &str) -> ApiResult<Value> {
    for (name, strategy) in STRATEGIES {
        if let Some(value) = strategy(text) {
            log::debug!("Extracted JSON using strategy '{}'", name);
            return Ok(value);
        }
    }

    log::warn!(
        "No JSON object found in model response (first 200 chars): {}",
        text.chars().take(200).collect::<String>()
    );
    Err(ApiError::MalformedResponse)
}

fn parse_object(candidate: &str) -> Option<Value> {
    serde_json::from_str::<Value>(candidate.trim())
        .ok()
        .filter(Value::is_object)
}

/// The whole response is the object.
pub fn whole_text(text: &str) -> Option<Value> {
    parse_object(text)
}

/// Contents of the first ```json (or untagged) fence that parse.
pub fn fenced_block(text: &str) -> Option<Value> {
    FENCED_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find_map(|body| parse_object(body.as_str()))
}

/// Greedy `{...}` matches taken from every fenced block body and then from
/// the bare text; first that parses.
pub fn greedy_brace_scan(text: &str) -> Option<Value> {
    let fenced = FENCED_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str());

    fenced
        .chain(std::iter::once(text))
        .flat_map(|source| GREEDY_BRACES.find_iter(source))
        .find_map(|m| parse_object(m.as_str()))
}

/// Everything from the first `{` to the last `}` in the text.
pub fn outermost_brace(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_object(&text[start..=end])
}
