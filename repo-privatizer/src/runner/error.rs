//! Runner error types.

use thiserror::Error;

/// Errors raised while reading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token variable is unset or empty.
    #[error("Environment variable {var} must be set to a GitHub token")]
    MissingToken { var: &'static str },

    /// The API base URL is not a valid absolute URL.
    #[error("Invalid GitHub API URL '{uri}': {source}")]
    InvalidBaseUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

/// Startup failures that abort the whole run.
///
/// Per-repository failures are never surfaced here; they end up in the
/// [`RunSummary`](crate::summary::RunSummary) instead.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error("Failed to build GitHub client: {0}")]
    Client(#[from] octocrab::Error),

    /// Listing the account's repositories failed.
    #[error(transparent)]
    List(#[from] crate::repositories::ListError),

    /// The listing succeeded but returned nothing.
    #[error("No repositories returned, check that GITHUB_TOKEN is valid")]
    NoRepositories,
}
