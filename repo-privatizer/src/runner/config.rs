//! Runner configuration.

use super::error::ConfigError;
use std::fmt;
use std::time::Duration;

/// Repository that always stays public.
pub const KEEP_PUBLIC: &str = "wallwallwallwall/AgentSkillsManager";

/// Variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Optional variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Public GitHub API.
pub const DEFAULT_BASE_URI: &str = "https://api.github.com";

const LIST_TIMEOUT: Duration = Duration::from_secs(30);
const UPDATE_TIMEOUT: Duration = Duration::from_secs(15);
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Configuration for a privatization run.
#[derive(Clone)]
pub struct RunnerConfig {
    /// GitHub token sent as a bearer credential.
    token: String,
    /// Full name of the repository left public.
    keep_public: String,
    /// API base URL.
    base_uri: String,
    /// Timeout for the repository listing call.
    list_timeout: Duration,
    /// Timeout for each visibility update attempt.
    update_timeout: Duration,
    /// Delay before retrying a failed update.
    retry_delay: Duration,
}

impl RunnerConfig {
    /// Creates a configuration with the default allowlist, endpoint and timings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            keep_public: KEEP_PUBLIC.to_string(),
            base_uri: DEFAULT_BASE_URI.to_string(),
            list_timeout: LIST_TIMEOUT,
            update_timeout: UPDATE_TIMEOUT,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// `GITHUB_TOKEN` is required; an empty value counts as missing.
    /// `GITHUB_API_URL` optionally replaces the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when no token is available and
    /// [`ConfigError::InvalidBaseUri`] when the override is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken { var: TOKEN_ENV })?;

        let config = Self::new(token);
        match std::env::var(API_URL_ENV) {
            Ok(uri) if !uri.trim().is_empty() => config.with_base_uri(uri),
            _ => Ok(config),
        }
    }

    /// Sets the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if `uri` does not parse.
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        if let Err(source) = url::Url::parse(&uri) {
            return Err(ConfigError::InvalidBaseUri { uri, source });
        }
        self.base_uri = uri;
        Ok(self)
    }

    /// Sets the repository that stays public.
    pub fn with_keep_public(mut self, full_name: impl Into<String>) -> Self {
        self.keep_public = full_name.into();
        self
    }

    /// Sets the listing timeout.
    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }

    /// Sets the per-attempt update timeout.
    pub fn with_update_timeout(mut self, timeout: Duration) -> Self {
        self.update_timeout = timeout;
        self
    }

    /// Sets the delay before the update retry.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the full name of the repository left public.
    pub fn keep_public(&self) -> &str {
        &self.keep_public
    }

    /// Returns the API base URL.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn list_timeout(&self) -> Duration {
        self.list_timeout
    }

    pub fn update_timeout(&self) -> Duration {
        self.update_timeout
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("token", &"<redacted>")
            .field("keep_public", &self.keep_public)
            .field("base_uri", &self.base_uri)
            .field("list_timeout", &self.list_timeout)
            .field("update_timeout", &self.update_timeout)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}
