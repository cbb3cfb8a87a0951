//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP adapter ──► ReviewService ──► Llm port ──► OpenAI-compatible adapter
//! ```
//!
//! # Available Ports
//!
//! - [`Llm`] - Text completion against an upstream model

pub mod outbound;

pub use outbound::llm::Llm;
