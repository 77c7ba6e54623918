//! Run summary types.

use super::result::RepositoryOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories returned by the listing.
    pub repositories_listed: usize,

    /// Number of allowlisted repositories left public.
    pub kept_public: usize,

    /// Number of repositories that were already private.
    pub already_private: usize,

    /// Number of repositories made private.
    pub made_private: usize,

    /// Number of repositories whose update failed.
    pub failed: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repositories_listed: usize) -> Self {
        Self {
            repositories_listed,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record(&mut self, outcome: &RepositoryOutcome) {
        match outcome {
            RepositoryOutcome::KeptPublic { .. } => self.kept_public += 1,
            RepositoryOutcome::AlreadyPrivate { .. } => self.already_private += 1,
            RepositoryOutcome::MadePrivate { .. } => self.made_private += 1,
            RepositoryOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any update failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_outcomes() {
        let mut summary = RunSummary::new(4);

        summary.record(&RepositoryOutcome::KeptPublic {
            full_name: "octo/public".to_string(),
        });
        summary.record(&RepositoryOutcome::AlreadyPrivate {
            full_name: "octo/secret".to_string(),
        });
        summary.record(&RepositoryOutcome::MadePrivate {
            full_name: "octo/tool".to_string(),
        });
        assert!(!summary.has_failures());

        summary.record(&RepositoryOutcome::Failed {
            full_name: "octo/archived".to_string(),
            error: "HTTP 403 Repository was archived".to_string(),
        });

        assert_eq!(summary.repositories_listed, 4);
        assert_eq!(summary.kept_public, 1);
        assert_eq!(summary.already_private, 1);
        assert_eq!(summary.made_private, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
    }
}
