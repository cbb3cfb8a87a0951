//! Review generation use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{ReviewRequest, ReviewResponse};
use crate::error::Result;
use crate::port::outbound::llm::Llm;

/// Validates a request, renders its prompt, and asks the LLM for a review.
pub struct ReviewService {
    llm: Arc<dyn Llm>,
}

impl ReviewService {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Generate a review for one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`](crate::error::Error::Domain) for a blank title
    /// (the LLM is not called), or whatever the LLM client returns.
    pub async fn generate(&self, request: ReviewRequest) -> Result<ReviewResponse> {
        let prompt = request.prompt()?;
        debug!(
            style = %request.style,
            language = %request.language,
            prompt_chars = prompt.chars().count(),
            "Prompt rendered"
        );

        let completion = self.llm.complete(&prompt).await?;
        info!(
            provider = self.llm.name(),
            style = %request.style,
            language = %request.language,
            "Review generated"
        );

        Ok(request.into_response(&completion))
    }
}
