//! Data models for the translation client.
//!
//! This module contains:
//! - The caller-facing request/result types (`translation`)
//! - The OpenAI-compatible chat-completions wire types (`chat`)

// Author: kelexine (https://github.com/kelexine)

pub mod chat;
pub mod translation;

pub use chat::{ChatCompletionEnvelope, ChatCompletionRequest, ConversationTurn, Role};
pub use translation::{TranslationRequest, TranslationResult};
