//! Domain validation errors for review requests.
//!
//! These errors are business-rule rejections. Structural problems (unknown
//! style, unknown language, missing fields) never reach the domain: they are
//! rejected while the request body is deserialized.
//!
//! # Examples
//!
//! ```
//! use roast_my_book::domain::error::DomainError;
//! use roast_my_book::domain::BookTitle;
//!
//! let result = BookTitle::try_new("   ");
//! assert!(matches!(result, Err(DomainError::EmptyBookName)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The book title is empty or whitespace-only.
    #[error("book name must not be empty")]
    EmptyBookName,
}
