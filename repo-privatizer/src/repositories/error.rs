//! Repository listing error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while listing repositories.
#[derive(Debug, Error)]
pub enum ListError {
    /// The server answered with an error status.
    #[error("Failed to list repositories: {description}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// `HTTP {status} {message}` or the raw body.
        description: String,
    },

    /// Transport or client error.
    #[error("Failed to list repositories: {0}")]
    Request(#[from] octocrab::Error),

    /// The response was not a list of repositories.
    #[error("Failed to decode repository list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The listing did not complete in time.
    #[error("Failed to list repositories: timed out after {after:?}")]
    TimedOut { after: Duration },
}
