//! Gateway error types
//!
//! Every failed backend call becomes a [`GatewayError`]. Pages show
//! [`GatewayError::user_message`] and never the cause; the cause is logged
//! where the error is created.

use thiserror::Error;

/// Error from a backend call
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connect, timeout, TLS)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Backend returned {status} for {url}: {body}")]
    Backend {
        url: String,
        status: u16,
        body: String,
    },

    /// The backend answered 404
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The response body did not match the expected shape
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    /// An id or slug that cannot be placed in a request path; nothing was sent
    #[error("'{0}' is not a valid id or slug")]
    InvalidPathSegment(String),

    /// The client could not be built
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// Generic message safe to show to a user
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::Transport { .. } => {
                "Could not reach the server. Please check your connection and try again."
            }
            GatewayError::NotFound { .. } => "The requested item could not be found.",
            GatewayError::Backend { .. } | GatewayError::Decode { .. } => {
                "Something went wrong. Please try again."
            }
            GatewayError::InvalidPathSegment(_) => "That id or slug is not valid.",
            GatewayError::Config(_) => "The client is not configured correctly.",
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Backend { status, .. } => Some(*status),
            GatewayError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Result type alias using GatewayError
pub type GatewayResult<T> = Result<T, GatewayError>;
