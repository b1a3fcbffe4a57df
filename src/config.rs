use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set. Export it before running.")]
    Missing(String),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Settings for the chat-completion provider, read once at startup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub json_mode: bool,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Variables are
    /// named `GROQ_*`; everything but the API key has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = var("GROQ_API_KEY")
            .ok_or_else(|| ConfigError::Missing("GROQ_API_KEY".to_string()))?;

        let api_url = var("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let model = var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match var("GROQ_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: "GROQ_TIMEOUT_SECS".to_string(),
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let json_mode = match var("GROQ_JSON_MODE") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                name: "GROQ_JSON_MODE".to_string(),
                value,
            })?,
            None => true,
        };

        Ok(Self {
            api_key,
            api_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
            json_mode,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
