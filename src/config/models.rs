//! Configuration data structures for the honyaku service.
//!
//! This module defines the schema for the application settings: the HTTP
//! front end, the upstream chat-completion endpoint, and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream chat-completion endpoint settings.
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream chat-completion endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// API key sent as a Basic credential. Required, no default.
    #[serde(default)]
    pub api_key: String,

    /// OpenAI-compatible chat-completions URL.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Downstream model identifier.
    /// Default: `gpt-oss-120b`
    #[serde(default = "default_model")]
    pub model: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask credentials in logged upstream errors.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_tokens: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: default_api_endpoint(),
            model: default_model(),
        }
    }
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_endpoint", &self.api_endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_tokens: true,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

pub(crate) fn default_api_endpoint() -> String {
    crate::upstream::DEFAULT_API_ENDPOINT.to_string()
}

pub(crate) fn default_model() -> String {
    crate::upstream::DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
