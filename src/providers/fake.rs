//! Scripted chat provider for tests.
//!
//! Replies are handed out in the order they were queued, and every call is
//! recorded so tests can assert on how many upstream requests were made.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ApiError, ApiResult};
use crate::providers::traits::ChatProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_prompt: String,
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    replies: Mutex<VecDeque<ApiResult<String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_reply(self, reply: &str) -> Self {
        self.push(Ok(reply.to_string()));
        self
    }

    /// Queue a failure.
    pub fn with_error(self, error: ApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, reply: ApiResult<String>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> ApiResult<String> {
        self.calls
            .lock()
            .map_err(|e| ApiError::Internal(format!("FakeProvider lock poisoned: {}", e)))?
            .push(RecordedCall {
                system_prompt: system_prompt.to_string(),
                user_prompt: user_prompt.to_string(),
            });

        self.replies
            .lock()
            .map_err(|e| ApiError::Internal(format!("FakeProvider lock poisoned: {}", e)))?
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Invocation(format!(
                    "FakeProvider: no reply queued for prompt (first 100 chars): {}",
                    user_prompt.chars().take(100).collect::<String>()
                )))
            })
    }

    fn get_model_info(&self) -> String {
        "fake-model".to_string()
    }
}
