//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Failed to decode a JSON body from the server
    #[error("Decoding error: {0}")]
    Json(#[from] serde_json::Error),
}
