//! wiremock-based GitHub mock server shared by the integration tests.

#![allow(dead_code)]

use repo_privatizer::RunnerConfig;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Allowlisted repository used throughout the tests.
pub const KEEP: &str = "octo/keep-me";

/// Create a mock repository JSON object as returned by `GET /user/repos`.
fn mock_repository(full_name: &str, private: bool) -> serde_json::Value {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    json!({
        "id": 1,
        "node_id": "R_test",
        "name": name,
        "full_name": full_name,
        "private": private,
        "html_url": format!("https://github.com/{full_name}"),
        "url": format!("https://api.github.com/repos/{full_name}"),
        "fork": false
    })
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Config pointed at this server with short timings.
    pub fn config(&self) -> RunnerConfig {
        RunnerConfig::new("test-token")
            .with_base_uri(self.server.uri())
            .unwrap()
            .with_keep_public(KEEP)
            .with_list_timeout(Duration::from_secs(5))
            .with_update_timeout(Duration::from_millis(200))
            .with_retry_delay(Duration::from_millis(10))
    }

    /// Mock GET /user/repos with the given (full_name, private) pairs.
    pub async fn list(&self, repositories: &[(&str, bool)]) {
        let body: Vec<_> = repositories
            .iter()
            .map(|(full_name, private)| mock_repository(full_name, *private))
            .collect();
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("type", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user/repos failing with the given status.
    pub async fn list_error(&self, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": message,
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user/repos failing with a plain-text body.
    pub async fn list_error_text(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    fn patch(full_name: &str) -> wiremock::MockBuilder {
        Mock::given(method("PATCH"))
            .and(path(format!("/repos/{full_name}")))
            .and(body_json(json!({ "private": true })))
    }

    /// Mock a successful PATCH /repos/{full_name}.
    pub async fn patch_ok(&self, full_name: &str) {
        Self::patch(full_name)
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mock_repository(full_name, true)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock PATCH /repos/{full_name} answering with an error response.
    pub async fn patch_error(&self, full_name: &str, status: u16, body: serde_json::Value) {
        Self::patch(full_name)
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock PATCH /repos/{full_name} answering with a plain-text error body.
    pub async fn patch_error_text(&self, full_name: &str, status: u16, body: &str) {
        Self::patch(full_name)
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock PATCH /repos/{full_name} answering too late for the update timeout,
    /// for the first `times` requests only.
    pub async fn patch_stalled(&self, full_name: &str, times: u64) {
        Self::patch(full_name)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_repository(full_name, true))
                    .set_delay(Duration::from_secs(3)),
            )
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Number of PATCH requests received for `full_name`.
    pub async fn patch_count(&self, full_name: &str) -> usize {
        let target = format!("/repos/{full_name}");
        self.requests()
            .await
            .iter()
            .filter(|(method, path)| method == "PATCH" && *path == target)
            .count()
    }

    /// Total number of PATCH requests received.
    pub async fn total_patches(&self) -> usize {
        self.requests()
            .await
            .iter()
            .filter(|(method, _)| method == "PATCH")
            .count()
    }

    /// All received requests as (method, path) pairs.
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                (
                    request.method.as_str().to_string(),
                    request.url.path().to_string(),
                )
            })
            .collect()
    }
}
