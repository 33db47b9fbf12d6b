//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUGGEST_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SUGGEST_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Where `POST /api/suggest-messages` is forwarded. Suggestions are
    /// unavailable when unset.
    pub suggest_upstream_url: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SUGGEST_UPSTREAM_URL`: suggestion generator endpoint
    /// - `SUGGEST_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUGGEST_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let suggest_upstream_url = std::env::var("SUGGEST_UPSTREAM_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("SUGGEST_REQUEST_TIMEOUT_SECS", DEFAULT_SUGGEST_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SUGGEST_CONNECT_TIMEOUT_SECS", DEFAULT_SUGGEST_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, suggest_upstream_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
