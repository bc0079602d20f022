//! Error type for discovery API calls.

use thiserror::Error;

/// Errors returned by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the body's `error` field when present
    #[error("API request failed: {status}")]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body is not the expected JSON
    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Backend-supplied error message, if the response carried a non-empty one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// HTTP status code for status errors, kept for diagnostics and logging
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
