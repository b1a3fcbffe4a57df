use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::{ApiError, ApiResult};
use crate::providers::traits::ChatProvider;

#[derive(Debug, Clone)]
pub struct GroqProvider {
    config: ProviderConfig,
}

impl GroqProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    fn build_payload(&self, system_prompt: &str, user_prompt: &str) -> Value {
        let mut payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        if self.config.json_mode {
            payload["response_format"] = json!({ "type": "json_object" });
        }

        payload
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> ApiResult<String> {
        if system_prompt.trim().is_empty() || user_prompt.trim().is_empty() {
            return Err(ApiError::Invocation("prompts must not be empty".to_string()));
        }

        let payload = self.build_payload(system_prompt, user_prompt);
        log::debug!(
            "Sending request to Groq API: {}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );

        // One client per call; dropped with its connections when the call ends.
        let client = Client::builder().timeout(self.config.timeout).build()?;

        let response = client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response.json().await?;
        log::debug!(
            "Groq API response: {}",
            serde_json::to_string_pretty(&response_json).unwrap_or_default()
        );

        let first_choice = response_json
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .ok_or(ApiError::EmptyResponse)?;

        first_choice
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|s| s.to_string())
            .ok_or(ApiError::EmptyResponse)
    }

    fn get_model_info(&self) -> String {
        self.config.model.clone()
    }
}
