//! Client configuration management.
//!
//! Consolidates host/port resolution from environment variables and derives
//! the server base URL.

use std::time::Duration;

/// Default server host when not otherwise configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port when not otherwise configured.
pub const DEFAULT_PORT: u16 = 4201;

/// Connection settings for the blackjack server.
///
/// Immutable once handed to an [`ApiClient`](crate::api_client::ApiClient);
/// build a second config to talk to a second server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname
    pub host: String,
    /// Server TCP port
    pub port: u16,
    /// When true, every request uses a fresh connection instead of a pooled
    /// one.
    pub disable_pooling: bool,
    /// Optional per-request timeout; requests wait indefinitely when unset
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            disable_pooling: true,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for an explicit host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `BJ_HOST` and `BJ_PORT`, falling back to `localhost:4201`.
    /// An unparseable port falls back to the default rather than erroring.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("BJ_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("BJ_PORT", DEFAULT_PORT),
            ..Self::default()
        }
    }

    /// The server base URL, of the form `http://<host>:<port>`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
