//! The fetch failure kind.
//!
//! Callers treat every variant the same way (the load failed). The variants
//! exist so the diagnostic record says why.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or redirect failure before a response arrived.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        /// Response body, capped.
        body: String,
    },

    /// The response started but its body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body is not a well-formed news envelope.
    #[error("malformed news payload from {url}: {source}")]
    Payload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The task driving the fetch panicked or was torn down.
    #[error("news fetch did not complete: {reason}")]
    Interrupted { reason: String },
}

impl FetchFailure {
    /// HTTP status, when the server got far enough to send one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
