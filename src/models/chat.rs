//! OpenAI-compatible chat-completions wire types.
//!
//! Only the fields this client sends or reads are modelled; unknown envelope
//! fields (`id`, `usage`, ...) are ignored on decode.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of the outbound prompt. Order in the sequence is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ConversationTurn],
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response envelope. Missing `choices` decodes as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionEnvelope {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Assistant message. Reasoning models may leave `content` empty and put the
/// answer in `reasoning_content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub reasoning_content: Option<String>,
}
