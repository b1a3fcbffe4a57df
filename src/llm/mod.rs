pub mod json_extract;

pub use json_extract::extract_json;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::providers::traits::ChatProvider;

/// Run one chat completion and deserialize the JSON object found in the reply.
pub async fn chat_json<T, P>(provider: &P, system_prompt: &str, user_prompt: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
    P: ChatProvider + ?Sized,
{
    let response = provider.chat(system_prompt, user_prompt).await?;
    let value = extract_json(&response)?;

    serde_json::from_value(value)
        .map_err(|e| ApiError::Internal(format!("Unexpected response shape from Groq API: {}", e)))
}
