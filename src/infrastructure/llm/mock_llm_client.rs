use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

/// One `complete` call as seen by [`MockLlmClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
}

/// Replays scripted responses in order and records every request. Once the
/// script is exhausted it echoes a fixed answer.
#[derive(Default)]
pub struct MockLlmClient {
    script: Mutex<VecDeque<Result<String, LlmClientError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Vec<Result<String, LlmClientError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, LlmClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                system_prompt: system_prompt.to_string(),
                user_message: user_message.to_string(),
                max_tokens,
            });
        }

        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| Ok("Mock answer".to_string()))
    }
}
