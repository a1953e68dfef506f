//! Error types for the content client.

use serde_json::Value;

/// Everything that can go wrong between building a request and decoding its body.
///
/// Values of this type only ever reach callers of
/// [`Client::fetch_content`](crate::Client::fetch_content) wrapped inside
/// [`Envelope::Failure`](crate::Envelope::Failure).
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The configured base URL and path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("Request failed: {0}")]
    Transport(String),
    /// No response within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// Non-success status without a structured error body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// Non-success status with the backend's `{ "error": { ... } }` object.
    #[error("Backend returned {status} {name}: {message}")]
    Backend {
        status: u16,
        name: String,
        message: String,
        details: Value,
    },
    /// The body was not the JSON document we expected.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl Error {
    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport(err.to_string())
        }
    }
}
