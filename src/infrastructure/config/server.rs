//! HTTP listener configuration.

use serde::Deserialize;

/// Address the HTTP server binds to.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Overridden by `ROAST_HOST`.
    #[serde(default = "default_host")]
    pub host: String,
    /// Overridden by `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
