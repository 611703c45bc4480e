// Shared test doubles
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use honyaku::upstream::{ExchangeError, HttpExchange, HttpReply};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded outbound call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub authorization: String,
    pub body: serde_json::Value,
}

/// Replays scripted outcomes and records every call it receives.
/// When the script runs out, the last outcome is repeated.
pub struct ScriptedExchange {
    script: Mutex<VecDeque<Result<HttpReply, ExchangeError>>>,
    last: Mutex<Option<Result<HttpReply, ExchangeError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedExchange {
    pub fn new(script: Vec<Result<HttpReply, ExchangeError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self::new(vec![Ok(HttpReply {
            status,
            body: body.into(),
        })])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpExchange for ScriptedExchange {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> Result<HttpReply, ExchangeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            authorization: authorization.to_string(),
            body: serde_json::from_str(&body).expect("request body is JSON"),
        });

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(outcome) => {
                *last = Some(outcome.clone());
                outcome
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(ExchangeError::Other("no scripted reply".to_string()))),
        }
    }
}

/// Chat-completions envelope whose first message has the given content.
pub fn envelope_with_content(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
