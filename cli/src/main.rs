//! CLI for repo-privatizer.
//!
//! Sets every repository of the account behind `GITHUB_TOKEN` to private,
//! except the allowlisted one.

use clap::Parser;
use repo_privatizer::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Make all of your GitHub repositories private, except the allowlisted one.
///
/// Reads the token from GITHUB_TOKEN and, optionally, the API base URL from
/// GITHUB_API_URL.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let _args = Args::parse();

    // Both ring and aws-lc-rs may be compiled in; pick one before octocrab builds its TLS config.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let result = run().await;
    ExitCode::from(report(&result))
}

/// Prints the outcome of a run and returns the process exit status.
///
/// Any completed listing exits 0, even when some repositories failed;
/// only startup failures exit 1.
fn report(result: &Result<RunSummary, RunnerError>) -> u8 {
    match result {
        Ok(summary) => {
            print!("{}", render_summary(summary));
            0
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            eprintln!("{e}");
            1
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Diagnostics go to stderr so that stdout carries only the per-repository
/// status lines and the summary.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // RUST_LOG=debug shows every listed repository and each attempt
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run() -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::from_env()?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Renders the final run summary followed by the completion line.
fn render_summary(summary: &RunSummary) -> String {
    format!(
        "\nSummary:\n  Repositories listed: {}\n  Kept public: {}\n  Already private: {}\n  Made private: {}\n  Failed: {}\nDone.\n",
        summary.repositories_listed,
        summary.kept_public,
        summary.already_private,
        summary.made_private,
        summary.failed
    )
}
