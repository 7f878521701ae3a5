//! Error taxonomy for backend calls.
//!
//! Every failure a view can see is one of these three variants. The client
//! makes no status-specific decisions; a 401 and a 500 look the same to the
//! caller, which either shows the message in a toast or falls back to an
//! unauthenticated state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, aborted fetch.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` is the
    /// backend's `error` field when the body carried one, otherwise the
    /// synthesized `HTTP status N` string.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn backend(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP status {status}"));
        ApiError::Backend { status, message }
    }
}
