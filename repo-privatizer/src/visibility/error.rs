//! Visibility update error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while making a repository private.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The server answered with an error status.
    #[error("{description}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// `HTTP {status} {message} [details]`.
        description: String,
    },

    /// The request never got a response.
    #[error("{0}")]
    Transport(#[source] octocrab::Error),

    /// The attempt exceeded its timeout.
    #[error("timed out after {after:?}")]
    TimedOut { after: Duration },

    /// Any other client error, such as a body that is not UTF-8.
    #[error("{0}")]
    Other(#[source] octocrab::Error),
}

impl UpdateError {
    /// Returns true for local I/O failures worth one more attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::TimedOut { .. })
    }

    /// Returns the HTTP status if the server rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for UpdateError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => {
                Self::Transport(error)
            }
            other => Self::Other(other),
        }
    }
}
