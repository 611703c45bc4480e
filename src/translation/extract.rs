// Response extraction (chat envelope → translation result)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslatorError};
use crate::models::{ChatCompletionEnvelope, TranslationResult};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use tracing::{debug, warn};

static FENCED_REGEX: OnceLock<Regex> = OnceLock::new();
static WHOLE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMBEDDED_REGEX: OnceLock<Regex> = OnceLock::new();

fn fenced_regex() -> &'static Regex {
    FENCED_REGEX.get_or_init(|| {
        Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("Invalid regex pattern")
    })
}

fn whole_regex() -> &'static Regex {
    WHOLE_REGEX.get_or_init(|| Regex::new(r"(?s)^\s*(\{.*\})\s*$").expect("Invalid regex pattern"))
}

fn embedded_regex() -> &'static Regex {
    EMBEDDED_REGEX.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("Invalid regex pattern"))
}

/// Which field of the assistant message carried the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    Content,
    Reasoning,
}

/// A candidate extractor: pure `text -> Option<candidate>`.
pub type CandidateExtractor = fn(&str) -> Option<&str>;

/// Markdown ```json fenced block.
pub fn fenced_block(text: &str) -> Option<&str> {
    fenced_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The whole text is one object, allowing surrounding whitespace.
pub fn whole_object(text: &str) -> Option<&str> {
    whole_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First `{` through last `}` anywhere in the text.
pub fn embedded_object(text: &str) -> Option<&str> {
    embedded_regex().find(text).map(|m| m.as_str())
}

/// Extraction strategies, tried in order; first match wins.
pub const EXTRACTORS: &[(&str, CandidateExtractor)] = &[
    ("fenced", fenced_block),
    ("whole", whole_object),
    ("embedded", embedded_object),
];

/// Locate the JSON candidate in free-form model output. Falls back to the
/// text itself when no strategy matches.
pub fn extract_candidate(text: &str) -> (&'static str, &str) {
    EXTRACTORS
        .iter()
        .find_map(|(name, extractor)| extractor(text).map(|candidate| (*name, candidate)))
        .unwrap_or(("verbatim", text))
}

/// Pull the model text out of the envelope: `content` if non-empty, else
/// `reasoning_content`, trimmed.
pub fn model_output(envelope: ChatCompletionEnvelope) -> Result<(String, OutputChannel)> {
    let message = envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .ok_or_else(|| TranslatorError::parse("empty model output", ""))?;

    let content = message.content.unwrap_or_default();
    if !content.is_empty() {
        return Ok((content.trim().to_string(), OutputChannel::Content));
    }

    let reasoning = message.reasoning_content.unwrap_or_default();
    if !reasoning.is_empty() {
        warn!("Model returned empty content; falling back to reasoning_content");
        return Ok((reasoning.trim().to_string(), OutputChannel::Reasoning));
    }

    Err(TranslatorError::parse("empty model output", ""))
}

/// Decode the raw response body into a translation result.
pub fn extract(raw_body: &str) -> Result<TranslationResult> {
    let envelope: ChatCompletionEnvelope = serde_json::from_str(raw_body).map_err(|e| {
        debug!("Envelope decode failed: {}", e);
        TranslatorError::parse("envelope undecodable", raw_body)
    })?;

    let (text, channel) = model_output(envelope)?;
    let (strategy, candidate) = extract_candidate(&text);
    debug!("Extracted JSON candidate via '{}' strategy", strategy);
    crate::metrics::record_extraction(strategy);

    let reason = |what: &str| match channel {
        OutputChannel::Content => what.to_string(),
        OutputChannel::Reasoning => format!("{} (answer taken from reasoning_content)", what),
    };

    let map: Map<String, Value> = serde_json::from_str(candidate).map_err(|_| {
        TranslatorError::parse(reason("model output is not a JSON object"), candidate)
    })?;

    TranslationResult::from_map(map).ok_or_else(|| {
        TranslatorError::parse(
            reason("model output has no usable \"translation\" field"),
            candidate,
        )
    })
}
