//! Infrastructure layer.
//!
//! Technical concerns that support the service without containing business
//! logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`monitoring`] - Request and generation metrics

pub mod bootstrap;
pub mod config;
pub mod monitoring;

pub use config::Config;
