//! Configuration loading and validation.

pub mod llm;
pub mod logging;
pub mod server;
pub mod settings;

pub use llm::LlmConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use settings::Config;
