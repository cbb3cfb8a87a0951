//! OpenAI-compatible chat completions client.
//!
//! Provides an implementation of the [`Llm`] trait for any endpoint that
//! speaks the OpenAI Chat Completions contract (the default deployment points
//! at an LLM proxy serving Gemini models).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::LlmConfig;
use crate::port::outbound::llm::Llm;

/// Path appended to the configured base URL.
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// OpenAI-compatible API client.
///
/// Makes exactly one request per [`Llm::complete`] call. The request timeout
/// is enforced by the underlying `reqwest` client.
#[derive(Debug, Clone)]
pub struct OpenAiCompatible {
    /// HTTP client for API requests.
    client: Client,
    /// Full chat completions URL.
    endpoint: String,
    /// API key for bearer authentication.
    api_key: String,
    /// Model identifier.
    model: String,
    /// Maximum tokens to generate in the response.
    max_tokens: usize,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
}

impl OpenAiCompatible {
    /// Create a client from validated upstream configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be built.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(ConfigError::MissingField {
            field: "LLM_PROXY_KEY",
        })?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: completions_url(&config.base_url),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Replace the HTTP client.
    ///
    /// The replacement client is responsible for its own timeout.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, prompt: &str) -> Result<String> {
        let request = Request {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(describe)?
            .error_for_status()
            .map_err(describe)?
            .json::<Response>()
            .await
            .map_err(describe)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Upstream("response contained no completion text".into()))
    }
}

/// Shape a transport failure into an upstream error.
fn describe(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Upstream("request timed out".into())
    } else {
        Error::Upstream(err.to_string())
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}{COMPLETIONS_PATH}", base_url.trim_end_matches('/'))
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: usize,
    temperature: f64,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl Llm for OpenAiCompatible {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, endpoint = %self.endpoint, "Sending completion request");

        self.send(prompt).await.map_err(|e| {
            error!(provider = self.name(), error = %e, "LLM API call failed");
            match e {
                Error::Upstream(_) => e,
                other => Error::Upstream(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> LlmConfig {
        LlmConfig {
            base_url: base_url.to_string(),
            api_key: Some("sk-test".into()),
            ..LlmConfig::default()
        }
    }

    fn no_proxy_client(timeout: Duration) -> Client {
        Client::builder().no_proxy().timeout(timeout).build().unwrap()
    }

    async fn client_for(server: &MockServer) -> OpenAiCompatible {
        OpenAiCompatible::from_config(&config(&server.uri()))
            .unwrap()
            .with_client(no_proxy_client(Duration::from_secs(5)))
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gemini-2.5-flash",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    // ==================== Request Shape Tests ====================

    #[test]
    fn request_serialization() {
        let request = Request {
            model: "gemini-2.5-flash",
            messages: vec![Message {
                role: "user",
                content: "Hello, world!",
            }],
            max_tokens: 800,
            temperature: 0.8,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gemini-2.5-flash");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello, world!");
    }

    #[test]
    fn completions_url_handles_trailing_slash() {
        assert_eq!(
            completions_url("https://llm-proxy.example.com/"),
            "https://llm-proxy.example.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:4000"),
            "http://localhost:4000/v1/chat/completions"
        );
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = LlmConfig::default();
        let result = OpenAiCompatible::from_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn response_with_unicode_content() {
        let response: Response =
            serde_json::from_value(completion("你好世界 🌍 émojis")).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("你好世界 🌍 émojis")
        );
    }

    // ==================== Upstream Exchange Tests (wiremock) ====================

    #[tokio::test(flavor = "multi_thread")]
    async fn sends_expected_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gemini-2.5-flash",
                "max_tokens": 800,
                "temperature": 0.8,
                "messages": [{ "role": "user", "content": "roast this" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Roasted.")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client.complete("roast this").await.unwrap();
        assert_eq!(text, "Roasted.");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn takes_first_choice() {
        let server = MockServer::start().await;
        let body = json!({
            "choices": [
                { "message": { "content": "First response" } },
                { "message": { "content": "Second response" } }
            ]
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.complete("x").await.unwrap(), "First response");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_is_upstream_failure_with_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.complete("x").await.unwrap_err();

        match err {
            Error::Upstream(detail) => assert!(detail.contains("502"), "detail: {detail}"),
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_choices_is_upstream_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.complete("x").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().starts_with("AI generation failed: "));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn null_content_is_upstream_failure() {
        let server = MockServer::start().await;
        let body = json!({ "choices": [{ "message": { "content": null } }] });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(matches!(
            client.complete("x").await,
            Err(Error::Upstream(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_is_upstream_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(matches!(
            client.complete("x").await,
            Err(Error::Upstream(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn timeout_is_upstream_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("late"))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = OpenAiCompatible::from_config(&config(&server.uri()))
            .unwrap()
            .with_client(no_proxy_client(Duration::from_millis(100)));

        let err = client.complete("x").await.unwrap_err();
        match err {
            Error::Upstream(detail) => assert_eq!(detail, "request timed out"),
            other => panic!("expected upstream timeout, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn connection_refused_is_upstream_failure() {
        // Nothing listens on port 9 on loopback in test environments.
        let client = OpenAiCompatible::from_config(&config("http://127.0.0.1:9"))
            .unwrap()
            .with_client(no_proxy_client(Duration::from_secs(2)));

        assert!(matches!(
            client.complete("x").await,
            Err(Error::Upstream(_))
        ));
    }
}
