// HTTP exchange seam: one POST, status + body or a classified failure
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A response obtained from the endpoint, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// No response was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    Timeout(String),
    Other(String),
}

impl ExchangeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExchangeError::Timeout(_))
    }
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeError::Timeout(text) | ExchangeError::Other(text) => f.write_str(text),
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ExchangeError::Timeout(error.to_string())
        } else {
            ExchangeError::Other(error.to_string())
        }
    }
}

/// Sends a JSON body to a URL with the given `Authorization` header value.
#[async_trait]
pub trait HttpExchange: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> std::result::Result<HttpReply, ExchangeError>;
}

/// Production exchange backed by reqwest.
///
/// Idle pooling is disabled, so every call sets up and tears down its own
/// connection.
pub struct ReqwestExchange {
    http_client: Client,
}

impl ReqwestExchange {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(0)
            .use_rustls_tls()
            .build()
            .map_err(|e| {
                TranslatorError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!(
            "Created HTTP client (connect timeout {:?}, request timeout {:?}, no pooling)",
            CONNECT_TIMEOUT, REQUEST_TIMEOUT
        );

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpExchange for ReqwestExchange {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> std::result::Result<HttpReply, ExchangeError> {
        let response = self
            .http_client
            .post(url)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpReply { status, body })
    }
}
