// Upstream chat-completion client module
// Author: kelexine (https://github.com/kelexine)

mod client;
pub mod exchange;

pub use client::{ClientConfig, TransportClient, MAX_ATTEMPTS, MAX_TOKENS, RETRY_PAUSE, TEMPERATURE};
pub use exchange::{ExchangeError, HttpExchange, HttpReply, ReqwestExchange};

/// Endpoint used when none is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.ai.sakura.ad.jp/v1/chat/completions";

/// Downstream model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-oss-120b";
