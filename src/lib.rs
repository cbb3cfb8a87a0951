//! Roast My Book - humorous book reviews written by an LLM.
//!
//! A thin HTTP service: a request names a book, a writing style and a
//! language; the service renders a prompt, asks one upstream chat-completions
//! endpoint for a review, and returns the text with the request echoed back.
//!
//! # Architecture
//!
//! - [`domain`] - Closed style/language sets, title validation, prompt templates
//! - [`port`] - The [`Llm`](port::Llm) completion trait
//! - [`application`] - `ReviewService`, the validate → prompt → complete pipeline
//! - [`adapter`] - axum HTTP API, CLI, and the OpenAI-compatible client
//! - [`infrastructure`] - Configuration, logging, metrics, process wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use roast_my_book::adapter::outbound::llm::OpenAiCompatible;
//! use roast_my_book::infrastructure::bootstrap::build_router;
//! use roast_my_book::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::parse_toml("")?;
//!     let llm = Arc::new(OpenAiCompatible::from_config(&config.llm)?);
//!     let _router = build_router(llm);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
