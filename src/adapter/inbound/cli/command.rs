//! Command-line interface definitions.
//!
//! Command-line flags override values from the config file and environment.

use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::Config;

/// HTTP service that writes humorous book reviews through an LLM
#[derive(Parser, Debug)]
#[command(name = "roast-my-book")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Address to bind (overrides server.host and ROAST_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter directive, e.g. "debug" or "roast_my_book=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_config_toml() {
        let cli = Cli::parse_from(["roast-my-book"]);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(cli.port.is_none());
        assert!(!cli.json_logs);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "roast-my-book",
            "--config",
            "/etc/roast.toml",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--log-level",
            "debug",
            "--json-logs",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(cli.config, PathBuf::from("/etc/roast.toml"));
        assert_eq!(config.server.bind_address(), "127.0.0.1:9100");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["roast-my-book", "--port", "70000"]).is_err());
    }
}
