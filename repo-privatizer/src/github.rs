//! GitHub client construction and API error formatting.

use crate::runner::RunnerConfig;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Deserialize;

/// Builds an authenticated client for the configured endpoint.
///
/// octocrab's own retry middleware is switched off; the visibility updater
/// decides when a request is retried.
///
/// # Errors
///
/// Returns an error if the base URI is rejected or the client cannot be built.
pub fn build_client(config: &RunnerConfig) -> Result<Octocrab, octocrab::Error> {
    Octocrab::builder()
        .base_uri(config.base_uri())?
        .personal_token(config.token().to_string())
        .add_retry_config(RetryConfig::None)
        .build()
}

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Option<Vec<serde_json::Value>>,
}

/// Formats an error response as `HTTP {status} {message} [details]`.
///
/// Bodies that are not GitHub-shaped JSON (proxy HTML pages, JSON without a
/// `message`) are reported verbatim after the status.
pub fn format_error_response(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => {
            let mut msg = format!("HTTP {status} {}", error.message);
            if let Some(errors) = &error.errors {
                msg.push_str(&format_error_details(errors));
            }
            msg
        }
        Err(_) => {
            let body = body.trim();
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status} {body}")
            }
        }
    }
}

/// Format error details from GitHub API errors array.
/// Returns a formatted string like " [field1 is code1, field2 is code2]" or empty string.
fn format_error_details(errors: &[serde_json::Value]) -> String {
    let details: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => e
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .or_else(|| e.as_str().map(str::to_string)),
            }
        })
        .collect();

    if details.is_empty() {
        String::new()
    } else {
        format!(" [{}]", details.join(", "))
    }
}
