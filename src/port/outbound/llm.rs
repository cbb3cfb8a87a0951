//! LLM completion port.
//!
//! Defines the interface the review service uses to turn a prompt into text.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap a specific provider and handle authentication and
/// response parsing. Every failure must come back as
/// [`Error::Upstream`](crate::error::Error::Upstream) so callers can report
/// the cause.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) to serve concurrent
/// HTTP requests.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The input prompt to complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the response is
    /// invalid. A single attempt is made.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
