//! Error type for backend API calls.

use thiserror::Error;

/// Failure talking to the backend.
///
/// Every variant is handled the same way by callers; the variants only
/// exist to make log lines more useful.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request exceeded its deadline.
    #[error("request timeout after {0}s")]
    Timeout(u64),

    /// Backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// Classify a reqwest error.
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_seconds: u64) -> Self {
        if e.is_timeout() {
            NetworkError::Timeout(timeout_seconds)
        } else if e.is_decode() {
            NetworkError::Decode(e.to_string())
        } else {
            NetworkError::Transport(e.to_string())
        }
    }
}
