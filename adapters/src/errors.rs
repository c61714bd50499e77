//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the remote
//! store, providing a unified error handling mechanism for all table
//! operations regardless of the concrete backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a usable HTTP response.
    #[error("store request failed: {0}")]
    Transport(String),

    /// The store answered with a non-success HTTP status.
    #[error("store returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}
