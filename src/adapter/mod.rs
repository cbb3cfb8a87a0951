//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the HTTP API and the command line
//! - [`outbound`] - Driven side: the upstream completion client

pub mod inbound;
pub mod outbound;
