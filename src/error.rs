use thiserror::Error;

/// Failures that keep a check from getting a response to compare.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to encode request body: {0}")]
    EncodeBody(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),
}
