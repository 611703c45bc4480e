// Request validation, run before any network work
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslatorError};
use crate::models::TranslationRequest;

/// Maximum input length, counted in Unicode scalar values after trimming.
pub const MAX_TEXT_CHARS: usize = 1500;

/// A request whose text has been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    pub text: &'a str,
    pub target_language: &'a str,
    pub source_language: &'a str,
    pub style: &'a str,
    pub custom_prompt: &'a str,
    pub is_literal: bool,
}

/// Reject empty or over-length text. Language and style identifiers are
/// passed through unchecked.
pub fn validate(request: &TranslationRequest) -> Result<ValidatedRequest<'_>> {
    let text = request.text.trim();

    if text.is_empty() {
        return Err(TranslatorError::InvalidInput("text is required".to_string()));
    }

    let length = text.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(TranslatorError::InvalidInput(format!(
            "text is too long: {} characters (max {})",
            length, MAX_TEXT_CHARS
        )));
    }

    Ok(ValidatedRequest {
        text,
        target_language: &request.target_language,
        source_language: &request.source_language,
        style: &request.style,
        custom_prompt: &request.custom_prompt,
        is_literal: request.is_literal,
    })
}
