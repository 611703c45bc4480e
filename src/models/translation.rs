//! Inbound translation request and outbound result types.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TARGET: &str = "english";
pub const DEFAULT_SOURCE: &str = "auto";
pub const DEFAULT_STYLE: &str = "standard";

/// A caller's translation request, as received from a front end.
///
/// Field names follow the inbound wire contract (`target`, `source`,
/// `is_literal`, `custom_prompt`). A missing `text` deserializes to an empty
/// string so that validation, not deserialization, reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate.
    #[serde(default)]
    pub text: String,

    /// Target language identifier (e.g. `english`, `japanese`).
    #[serde(default = "default_target", rename = "target")]
    pub target_language: String,

    /// Source language identifier, or `auto` for detection.
    #[serde(default = "default_source", rename = "source")]
    pub source_language: String,

    /// Style identifier; `custom` enables `custom_prompt`.
    #[serde(default = "default_style")]
    pub style: String,

    /// Free-form instruction used only when `style == "custom"`.
    #[serde(default)]
    pub custom_prompt: String,

    /// Literal (structure-preserving) instead of natural translation.
    #[serde(default)]
    pub is_literal: bool,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn target(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }

    pub fn source(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = prompt.into();
        self
    }

    pub fn literal(mut self, is_literal: bool) -> Self {
        self.is_literal = is_literal;
        self
    }
}

impl Default for TranslationRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            target_language: default_target(),
            source_language: default_source(),
            style: default_style(),
            custom_prompt: String::new(),
            is_literal: false,
        }
    }
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// Decoded model answer. Always holds a non-empty `translation` string;
/// `detected_source`, `katakana` and `ruby_text` are advisory and unchecked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TranslationResult(Map<String, Value>);

impl TranslationResult {
    /// Wrap a decoded mapping. Returns `None` unless `translation` is a non-empty string.
    pub fn from_map(map: Map<String, Value>) -> Option<Self> {
        match map.get("translation") {
            Some(Value::String(s)) if !s.is_empty() => Some(Self(map)),
            _ => None,
        }
    }

    pub fn translation(&self) -> &str {
        self.get_str("translation").unwrap_or_default()
    }

    pub fn detected_source(&self) -> Option<&str> {
        self.get_str("detected_source")
    }

    pub fn katakana(&self) -> Option<&str> {
        self.get_str("katakana")
    }

    pub fn ruby_text(&self) -> Option<&str> {
        self.get_str("ruby_text")
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
