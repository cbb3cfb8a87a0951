//! Command-line entry point.

pub mod command;
pub mod run;

pub use command::Cli;
