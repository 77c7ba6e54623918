//! Per-repository outcome types.

use std::fmt;

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryOutcome {
    /// Allowlisted repository, left untouched.
    KeptPublic { full_name: String },

    /// Already private, no request sent.
    AlreadyPrivate { full_name: String },

    /// Visibility changed to private.
    MadePrivate { full_name: String },

    /// The update failed.
    Failed {
        /// Repository full name.
        full_name: String,
        /// Error message.
        error: String,
    },
}

impl fmt::Display for RepositoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeptPublic { full_name } => write!(f, "[skip] {full_name} (kept public)"),
            Self::AlreadyPrivate { full_name } => {
                write!(f, "[skip] {full_name} (already private)")
            }
            Self::MadePrivate { full_name } => write!(f, "Set private: {full_name} ... OK"),
            Self::Failed { full_name, error } => {
                write!(f, "Set private: {full_name} ... FAILED {error}")
            }
        }
    }
}
