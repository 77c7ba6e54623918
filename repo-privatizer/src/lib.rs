#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod github;
pub mod repositories;
pub mod runner;
pub mod summary;
pub mod visibility;

pub use github::build_client;
pub use repositories::{list_repositories, ListError, Repository};
pub use runner::{ConfigError, Runner, RunnerConfig, RunnerError, KEEP_PUBLIC};
pub use summary::{RepositoryOutcome, RunSummary};
pub use visibility::{set_private, UpdateError};
