//! Structured logging and credential-scrubbing helpers.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a scrubber that keeps API credentials out of logged upstream
//! errors.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{Result, TranslatorError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| TranslatorError::Internal(format!("Failed to install logger: {}", e)))
}

/// Replaces the credential after every `Basic ` / `Bearer ` scheme marker
/// with a `[REDACTED]` placeholder.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    for scheme in ["Basic ", "Bearer "] {
        let mut search_from = 0;
        while let Some(pos) = result[search_from..].find(scheme) {
            let start = search_from + pos + scheme.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',')
                .map(|i| start + i)
                .unwrap_or(result.len());

            if end > start {
                result.replace_range(start..end, "[REDACTED]");
            }
            search_from = start;
        }
    }

    result
}
