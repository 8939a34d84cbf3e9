// Client configuration: endpoint, timeout and optional session cookie.

use std::time::Duration;

use crate::error::{Error, Result};

/// Public Assembly64 endpoint.
pub const DEFAULT_BASE_URL: &str = "http://hackerswithstyle.se/leet";

/// Timeout used by the CLI when none is given on the command line.
pub const DEFAULT_TIMEOUT_SECS: u64 = 50;

pub const DEFAULT_USER_AGENT: &str = concat!("assembly64-cli/", env!("CARGO_PKG_VERSION"));

/// Upper bound for a single exchange. Always non-zero.
///
/// Every exchange takes one of these by value, so an unbounded call cannot
/// be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout(Duration);

impl Timeout {
    pub fn new(duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self(duration))
    }

    pub fn from_secs(secs: u64) -> Result<Self> {
        Self::new(Duration::from_secs(secs))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

/// Settings for building an `ApiClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied by the endpoint helpers (`presets`, `search`, ...).
    pub timeout: Timeout,
    /// Session cookie attached to every endpoint request when present.
    pub cookie: Option<String>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout: Timeout) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            cookie: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}
