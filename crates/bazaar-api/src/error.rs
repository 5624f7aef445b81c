//! Error types for backend communication.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The configured base URL could not be used to build a client.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` carries the server's `message`/`error` field when the body
    /// had one, otherwise the status line.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body was not the shape the caller expected.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A response object failed model-boundary normalization.
    #[error(transparent)]
    Model(#[from] bazaar_model::ModelError),
}

impl ApiError {
    /// A message suitable for a toast.
    ///
    /// Server-provided messages pass through verbatim; transport and decode
    /// failures collapse to a generic line rather than leaking internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::InvalidBaseUrl(_) => "The configured API address is invalid.".to_string(),
            Self::Decode(_) | Self::Model(_) => {
                "The server sent an unexpected response.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
