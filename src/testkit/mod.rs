//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] - `ScriptedLlm`, an [`Llm`](crate::port::Llm) that records
//!   prompts and returns a fixed reply or error.
//! - [`config`] - Canonical test configuration pointing at a given upstream.

pub mod config;
pub mod llm;
