//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    Port(String),
    #[error("UPSTREAM_API_URL must start with http:// or https://, got '{0}'")]
    UpstreamScheme(String),
    #[error("invalid UPSTREAM_TIMEOUT_SECS: {0}")]
    Timeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL `/api` requests are forwarded to; `None` disables forwarding.
    pub upstream_url: Option<String>,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_API_URL`: http(s) base URL, trailing `/` trimmed
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Port(raw))?,
            None => DEFAULT_PORT,
        };
        let upstream_url = env_non_empty("UPSTREAM_API_URL").map(parse_upstream).transpose()?;
        let timeout_secs = match env_non_empty("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Timeout(raw)),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self { port, upstream_url, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_upstream(raw: String) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::UpstreamScheme(raw));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
