//! Canonical test configurations.

use crate::infrastructure::config::{Config, LlmConfig};

/// API key used by every test configuration.
pub const TEST_API_KEY: &str = "sk-test";

/// Default configuration with an API key set and the upstream at `base_url`.
pub fn config(base_url: &str) -> Config {
    Config {
        llm: LlmConfig {
            base_url: base_url.to_string(),
            api_key: Some(TEST_API_KEY.to_string()),
            ..LlmConfig::default()
        },
        ..Config::default()
    }
}
