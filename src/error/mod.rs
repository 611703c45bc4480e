// Error types for the honyaku translation client
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Failures raised while talking to the chat-completion endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),
}

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {reason} (preview: {preview})")]
    Parse { reason: String, preview: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used by front ends to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Transport,
    Parse,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Transport => "transport",
            ErrorKind::Parse => "parse",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Maximum number of characters kept in a parse-error preview.
pub const PREVIEW_LIMIT: usize = 500;

impl TranslatorError {
    /// Build a parse error, keeping at most [`PREVIEW_LIMIT`] characters of the offending text.
    pub fn parse(reason: impl Into<String>, offending: &str) -> Self {
        TranslatorError::Parse {
            reason: reason.into(),
            preview: offending.chars().take(PREVIEW_LIMIT).collect(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslatorError::InvalidInput(_) => ErrorKind::InvalidInput,
            TranslatorError::Transport(_) => ErrorKind::Transport,
            TranslatorError::Parse { .. } => ErrorKind::Parse,
            _ => ErrorKind::Internal,
        }
    }
}

// Convert TranslatorError to HTTP responses for Axum
impl IntoResponse for TranslatorError {
    fn into_response(self) -> Response {
        let (status, error_type) = match self.kind() {
            ErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, "invalid_request_error"),
            ErrorKind::Transport => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable"),
            ErrorKind::Parse => (StatusCode::INTERNAL_SERVER_ERROR, "parse_error"),
            ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preview_is_bounded_by_characters() {
        let text = "あ".repeat(800);
        match TranslatorError::parse("bad json", &text) {
            TranslatorError::Parse { preview, .. } => {
                assert_eq!(preview.chars().count(), PREVIEW_LIMIT);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_mapping() {
        let resp = TranslatorError::InvalidInput("empty".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = TranslatorError::from(TransportError::Status(500)).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = TranslatorError::parse("no json", "hi").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
