use async_trait::async_trait;
use crate::error::ApiResult;

/// A chat-completion backend: one system message, one user message, one
/// text reply.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Returns the raw text content of the first completion choice.
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> ApiResult<String>;

    fn get_model_info(&self) -> String;
}
