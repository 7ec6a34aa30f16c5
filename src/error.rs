//! Client error types
//!
//! Every failure a backend call can produce falls into one of three kinds.
//! Controllers catch and log them; nothing here is fatal.

use thiserror::Error;

/// Errors returned by a [`Backend`](crate::transport::Backend)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be completed (connection refused, DNS, timeout, offline)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The body was not the JSON shape we expect
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Coarse classification of a [`ClientError`], used in log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    HttpStatus,
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::HttpStatus => "http_status",
            FailureKind::Parse => "parse",
        }
    }
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Network(_) => FailureKind::Network,
            ClientError::HttpStatus { .. } => FailureKind::HttpStatus,
            ClientError::Parse(_) => FailureKind::Parse,
        }
    }

    /// Build a status error, falling back to the canonical reason when the body is empty
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            "no response body".to_string()
        } else {
            body
        };
        ClientError::HttpStatus { status, message }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::status(status.as_u16(), err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type alias for backend operations
pub type ClientResult<T> = Result<T, ClientError>;
