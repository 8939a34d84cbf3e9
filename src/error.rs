// Error type shared by the library side of the crate. The binary wraps
// these in `anyhow` with extra context before reporting them.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced while talking to the Assembly64 service.
#[derive(Debug, Error)]
pub enum Error {
    /// Local misconfiguration detected before any request is sent.
    #[error("configuration error: {0}")]
    Config(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {reason}")]
    Http {
        status: u16,
        reason: String,
        /// Error body returned by the server, if it sent one.
        body: Option<String>,
    },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_reason() {
        let err = Error::Http {
            status: 404,
            reason: "Not Found".to_string(),
            body: Some("not found".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn config_error_display_is_prefixed() {
        let err = Error::Config("timeout must be greater than zero".to_string());
        assert!(err.to_string().starts_with("configuration error"));
    }
}
