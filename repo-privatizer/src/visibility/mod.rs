//! Repository visibility updates.
//!
//! A repository is made private with `PATCH /repos/{owner}/{name}`. Local
//! I/O failures (transport errors and timeouts) get exactly one retry after
//! a fixed delay; error responses from the server are returned immediately.

mod error;

pub use error::UpdateError;

use crate::github::format_error_response;
use crate::runner::RunnerConfig;
use octocrab::Octocrab;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};

/// One initial attempt plus one retry.
const MAX_ATTEMPTS: u32 = 2;

/// Request body for the visibility change.
#[derive(Debug, Serialize)]
struct VisibilityPatch {
    private: bool,
}

/// Marks a repository private.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `full_name` - Repository in "owner/name" format
/// * `config` - Supplies the per-attempt timeout and the retry delay
///
/// # Errors
///
/// Returns [`UpdateError`] once the server rejects the request, or when the
/// retry also fails.
pub async fn set_private(
    octocrab: &Octocrab,
    full_name: &str,
    config: &RunnerConfig,
) -> Result<(), UpdateError> {
    let span = info_span!("set_private", repo = %full_name);

    async {
        let route = format!("/repos/{full_name}");
        let body = VisibilityPatch { private: true };
        let mut attempt = 1;

        loop {
            debug!(attempt, "Sending visibility update");
            match patch_once(octocrab, &route, &body, config.update_timeout()).await {
                Ok(()) => {
                    info!(attempt, "Repository is now private");
                    return Ok(());
                }
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        attempt,
                        error = %e,
                        delay = ?config.retry_delay(),
                        "Visibility update failed, retrying"
                    );
                    tokio::time::sleep(config.retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
    .instrument(span)
    .await
}

/// Sends a single PATCH bounded by `timeout`.
async fn patch_once(
    octocrab: &Octocrab,
    route: &str,
    body: &VisibilityPatch,
    timeout: Duration,
) -> Result<(), UpdateError> {
    match tokio::time::timeout(timeout, send_patch(octocrab, route, body)).await {
        Ok(result) => result,
        Err(_) => Err(UpdateError::TimedOut { after: timeout }),
    }
}

/// Sends the PATCH and turns any non-2xx status into [`UpdateError::Http`].
async fn send_patch(
    octocrab: &Octocrab,
    route: &str,
    body: &VisibilityPatch,
) -> Result<(), UpdateError> {
    let response = octocrab._patch(route, Some(body)).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = octocrab.body_to_string(response).await?;
    Err(UpdateError::Http {
        status: status.as_u16(),
        description: format_error_response(status.as_u16(), &body),
    })
}
