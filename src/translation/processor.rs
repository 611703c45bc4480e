// Translation pipeline: validate → compose → send → extract
// Author: kelexine (https://github.com/kelexine)

use super::{extract::extract, prompt::compose_turns, validate::validate};
use crate::error::Result;
use crate::models::{TranslationRequest, TranslationResult};
use crate::upstream::{ClientConfig, HttpExchange, TransportClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns translation requests into chat-completion calls and decodes the
/// answers.
///
/// Holds only immutable configuration, so one instance can be shared behind
/// an `Arc` and called concurrently.
pub struct TranslationRequestProcessor {
    transport: TransportClient,
}

impl TranslationRequestProcessor {
    /// Create a processor using the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: TransportClient::new(config)?,
        })
    }

    /// Create a processor over a caller-supplied HTTP exchange.
    pub fn with_exchange(config: ClientConfig, exchange: Arc<dyn HttpExchange>) -> Self {
        Self {
            transport: TransportClient::with_exchange(config, exchange),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Run one translation. Fails with `InvalidInput` before any network
    /// call, `Transport` if the endpoint could not be reached, or `Parse` if
    /// the reply holds no usable translation.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let outcome = self.run(request).await;

        match &outcome {
            Ok(_) => crate::metrics::record_translation("success"),
            Err(e) => {
                warn!("Translation failed ({}): {}", e.kind().as_str(), e);
                crate::metrics::record_translation(e.kind().as_str());
            }
        }

        outcome
    }

    async fn run(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let validated = validate(request)?;

        info!(
            "Translating {} chars: source={}, target={}, style={}, literal={}",
            validated.text.chars().count(),
            validated.source_language,
            validated.target_language,
            validated.style,
            validated.is_literal
        );

        let turns = compose_turns(&validated);
        let raw_body = self.transport.send(&turns).await?;
        let result = extract(&raw_body)?;

        debug!("Translation succeeded with {} fields", result.as_map().len());
        Ok(result)
    }
}
