use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, body read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the backend.
    #[error("server error {}: {}", .status, .message.as_deref().unwrap_or("no error body"))]
    Server {
        status: StatusCode,
        /// The backend's `{"error": ...}` field, when the body carried one.
        message: Option<String>,
    },
}

impl ApiError {
    /// User-facing message supplied by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }
}
