//! Review request and response records.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::language::Language;
use super::prompt::{render_prompt, TemplateTier};
use super::style::Style;

/// Inbound request to generate a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Title as sent by the caller. Checked for emptiness by [`Self::prompt`].
    pub book_name: String,
    pub style: Style,
    #[serde(default)]
    pub language: Language,
}

impl ReviewRequest {
    #[must_use]
    pub fn new(book_name: impl Into<String>, style: Style, language: Language) -> Self {
        Self {
            book_name: book_name.into(),
            style,
            language,
        }
    }

    /// Validate the title and render the prompt for this request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBookName`] if the title is blank.
    pub fn prompt(&self) -> Result<String, DomainError> {
        let title = BookTitle::try_new(&self.book_name)?;
        let tier = TemplateTier::for_language(self.language);
        Ok(render_prompt(tier, self.style, &title))
    }

    /// Shape the final response from a raw completion.
    #[must_use]
    pub fn into_response(self, completion: &str) -> ReviewResponse {
        ReviewResponse {
            review: completion.trim().to_string(),
            style: self.style,
            book_name: self.book_name,
            language: self.language,
        }
    }
}

/// Generated review plus the echoed request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub review: String,
    pub style: Style,
    pub book_name: String,
    pub language: Language,
}

/// A book title that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// Trim and validate a raw title.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBookName`] if nothing is left after trimming.
    pub fn try_new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyBookName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
