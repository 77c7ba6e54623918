//! Listing of the authenticated account's repositories.

mod error;
mod repository;

pub use error::ListError;
pub use repository::Repository;

use crate::github::format_error_response;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};

/// Results per page; only the first page is fetched.
const RESULTS_PER_PAGE: u8 = 100;

/// Lists the repositories of the authenticated user.
///
/// Fetches a single page of up to 100 repositories of every type, in the
/// order the API returns them.
///
/// # Errors
///
/// Returns [`ListError`] if the request fails, the server answers with an
/// error status, or the whole exchange exceeds `timeout`.
pub async fn list_repositories(
    octocrab: &Octocrab,
    timeout: Duration,
) -> Result<Vec<Repository>, ListError> {
    let span = info_span!("list_repositories", per_page = RESULTS_PER_PAGE);

    async {
        info!("Fetching repositories");

        let route = list_route();
        let repositories = tokio::time::timeout(timeout, fetch_page(octocrab, &route))
            .await
            .map_err(|_| ListError::TimedOut { after: timeout })??;

        for repository in &repositories {
            debug!(repo = %repository.full_name, private = repository.private, "Listed repository");
        }
        info!(count = repositories.len(), "Fetched repositories");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

fn list_route() -> String {
    format!("/user/repos?per_page={RESULTS_PER_PAGE}&type=all")
}

/// Sends the GET and decodes the body, keeping the status of error responses.
async fn fetch_page(octocrab: &Octocrab, route: &str) -> Result<Vec<Repository>, ListError> {
    let response = octocrab._get(route).await?;
    let status = response.status();
    let body = octocrab.body_to_string(response).await?;

    if !status.is_success() {
        return Err(ListError::Http {
            status: status.as_u16(),
            description: format_error_response(status.as_u16(), &body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}
