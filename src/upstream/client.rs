// Chat-completion transport with bounded timeout retry
// Author: kelexine (https://github.com/kelexine)

use super::exchange::{ExchangeError, HttpExchange, HttpReply, ReqwestExchange};
use super::{DEFAULT_API_ENDPOINT, DEFAULT_MODEL};
use crate::error::{Result, TransportError, TranslatorError};
use crate::models::{ChatCompletionRequest, ConversationTurn};
use crate::utils::logging::sanitize;
use crate::utils::retry::with_retry;
use backoff::backoff::Constant;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};
use zeroize::Zeroizing;

pub const TEMPERATURE: f32 = 0.1;
pub const MAX_TOKENS: u32 = 5000;
pub const MAX_ATTEMPTS: u32 = 2;
pub const RETRY_PAUSE: Duration = Duration::from_millis(500);

/// Immutable connection settings for one client.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: Zeroizing<String>,
    api_endpoint: String,
    model: String,
    sanitize_logs: bool,
}

impl ClientConfig {
    /// `api_endpoint` falls back to [`DEFAULT_API_ENDPOINT`] when `None` or blank.
    pub fn new(api_key: impl Into<String>, api_endpoint: Option<&str>) -> Result<Self> {
        let api_key = Zeroizing::new(api_key.into());
        if api_key.trim().is_empty() {
            return Err(TranslatorError::Config("API key must not be empty".to_string()));
        }

        let api_endpoint = api_endpoint
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_ENDPOINT)
            .to_string();

        Ok(Self {
            api_key,
            api_endpoint,
            model: DEFAULT_MODEL.to_string(),
            sanitize_logs: true,
        })
    }

    pub fn from_settings(settings: &crate::config::TranslatorConfig) -> Result<Self> {
        let config = Self::new(settings.api_key.as_str(), Some(&settings.api_endpoint))?;
        Ok(config.with_model(&settings.model))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Controls whether upstream error text is scrubbed of credentials before logging.
    pub fn with_log_sanitizing(mut self, enabled: bool) -> Self {
        self.sanitize_logs = enabled;
        self
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn log_safe(&self, text: &str) -> String {
        if self.sanitize_logs {
            sanitize(text)
        } else {
            text.to_string()
        }
    }

    /// `Basic <base64(api_key)>`
    fn authorization(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("Basic {}", STANDARD.encode(self.api_key.as_bytes())))
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_endpoint", &self.api_endpoint)
            .field("model", &self.model)
            .field("sanitize_logs", &self.sanitize_logs)
            .finish()
    }
}

/// Sends composed turns to the chat-completion endpoint.
pub struct TransportClient {
    exchange: Arc<dyn HttpExchange>,
    config: ClientConfig,
}

impl TransportClient {
    /// Create a client backed by reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_exchange(config, Arc::new(ReqwestExchange::new()?)))
    }

    pub fn with_exchange(config: ClientConfig, exchange: Arc<dyn HttpExchange>) -> Self {
        Self { exchange, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST the turns and return the raw body of a 200 response.
    ///
    /// Timeouts are retried once after [`RETRY_PAUSE`]; other transport
    /// failures and non-200 statuses fail immediately.
    pub async fn send(&self, turns: &[ConversationTurn]) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: turns,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let body = serde_json::to_string(&request)?;
        let authorization = self.config.authorization();
        let auth_header = authorization.as_str();
        let url = self.config.api_endpoint.as_str();

        debug!("Calling chat completions at {} with model {}", url, self.config.model);
        let start = Instant::now();

        let outcome = with_retry(
            "Chat completion",
            MAX_ATTEMPTS,
            ExchangeError::is_timeout,
            Constant::new(RETRY_PAUSE),
            || {
                let body = body.clone();
                async move {
                    let result = self.exchange.post_json(url, auth_header, body).await;
                    crate::metrics::record_upstream_attempt(match &result {
                        Ok(_) => "response",
                        Err(ExchangeError::Timeout(_)) => "timeout",
                        Err(ExchangeError::Other(_)) => "error",
                    });
                    result
                }
            },
        )
        .await;

        crate::metrics::record_upstream_duration(start.elapsed().as_secs_f64());

        let HttpReply { status, body } = outcome.map_err(|e| {
            warn!(
                "Chat completion transport failure: {}",
                self.config.log_safe(&e.to_string())
            );
            TranslatorError::Transport(match e {
                ExchangeError::Timeout(text) => TransportError::Timeout(text),
                ExchangeError::Other(text) => TransportError::Request(text),
            })
        })?;

        if status != 200 {
            let preview: String = body.chars().take(500).collect();
            error!(
                "Chat completion returned HTTP {} - {}",
                status,
                self.config.log_safe(&preview)
            );
            return Err(TransportError::Status(status).into());
        }

        debug!("Received {} bytes from chat completions", body.len());
        Ok(body)
    }
}
