//! Drives a privatization run over the account's repositories.

mod config;
mod error;

pub use config::{RunnerConfig, API_URL_ENV, DEFAULT_BASE_URI, KEEP_PUBLIC, TOKEN_ENV};
pub use error::{ConfigError, RunnerError};

use crate::github::build_client;
use crate::repositories::{list_repositories, Repository};
use crate::summary::{RepositoryOutcome, RunSummary};
use crate::visibility::set_private;
use octocrab::Octocrab;
use tracing::{error, info, warn};

/// Lists the account's repositories and makes every eligible one private.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = build_client(&config)?;
        Ok(Self { config, octocrab })
    }

    /// Executes the full run, printing one status line per repository.
    ///
    /// # Errors
    ///
    /// Fails only when the listing fails or returns no repositories.
    /// Individual update failures are recorded in the returned summary.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let repositories = list_repositories(&self.octocrab, self.config.list_timeout()).await?;

        if repositories.is_empty() {
            warn!("Listing returned no repositories");
            return Err(RunnerError::NoRepositories);
        }

        info!(
            count = repositories.len(),
            keep_public = %self.config.keep_public(),
            "Processing repositories"
        );

        let mut summary = RunSummary::new(repositories.len());
        for repository in &repositories {
            let outcome = self.process_repository(repository).await;
            println!("{outcome}");
            summary.record(&outcome);
        }

        Ok(summary)
    }

    /// Decides what to do with one repository and, if needed, updates it.
    pub async fn process_repository(&self, repository: &Repository) -> RepositoryOutcome {
        let full_name = repository.full_name.clone();

        if full_name == self.config.keep_public() {
            return RepositoryOutcome::KeptPublic { full_name };
        }
        if repository.private {
            return RepositoryOutcome::AlreadyPrivate { full_name };
        }

        match set_private(&self.octocrab, &full_name, &self.config).await {
            Ok(()) => RepositoryOutcome::MadePrivate { full_name },
            Err(e) => {
                error!(repo = %full_name, error = %e, "Failed to make repository private");
                RepositoryOutcome::Failed {
                    full_name,
                    error: e.to_string(),
                }
            }
        }
    }
}
