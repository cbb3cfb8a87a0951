//! Upstream LLM configuration.
//!
//! The upstream is any endpoint speaking the OpenAI chat-completions
//! contract. The API key is read from `LLM_PROXY_KEY` at runtime and never
//! from the config file.

use std::time::Duration;

use serde::Deserialize;

/// Upstream completion endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL; `/v1/chat/completions` is appended.
    ///
    /// Overridden by `LLM_PROXY_URL`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier.
    ///
    /// Overridden by `LLM_MODEL`. Defaults to "gemini-2.5-flash".
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens in the response. Defaults to 800.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Sampling temperature. Defaults to 0.8.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Whole-request timeout in seconds. Defaults to 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token loaded from `LLM_PROXY_KEY` env var at runtime.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LlmConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    "https://llm-proxy.densematrix.ai".into()
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

const fn default_max_tokens() -> usize {
    800
}

fn default_temperature() -> f64 {
    0.8
}

const fn default_timeout_secs() -> u64 {
    30
}
