// honyaku - structured LLM translation service
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod translation;
pub mod upstream;
pub mod utils;

pub use error::{ErrorKind, Result, TransportError, TranslatorError};
pub use models::{ConversationTurn, Role, TranslationRequest, TranslationResult};
pub use translation::TranslationRequestProcessor;
pub use upstream::{ClientConfig, HttpExchange};
