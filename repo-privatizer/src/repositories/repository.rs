//! Repository record as returned by the GitHub API.

use serde::Deserialize;

/// The two fields of a repository this tool cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Whether the repository is currently private.
    #[serde(default)]
    pub private: bool,
}
