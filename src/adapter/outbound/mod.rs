//! Outbound adapters (driven side).

pub mod llm;
