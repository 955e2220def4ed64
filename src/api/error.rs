//! Errors produced by [`ApiClient`](super::ApiClient) operations.
//!
//! `Display` strings match what the browser client surfaced, so code that
//! only shows the message keeps working. Callers that need to branch use
//! the variant, [`ApiError::status`] or [`ApiError::is_network`].

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the server-supplied text when the body carried one,
    /// otherwise `HTTP error! status: <code>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never completed (DNS, refused, reset, timeout).
    #[error("Network error occurred")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body was not the expected JSON.
    #[error("response decode failed (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The bearer token contains bytes not allowed in a header value.
    #[error("invalid bearer token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// HTTP status for failures where a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Hint only; the client itself never retries.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { status: 429 | 500..=599, .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
