//! Immutable service configuration.
//!
//! Built once from the command line in `main` and shared behind an `Arc`
//! by the upstream client and the history aggregator.

use std::time::Duration;

pub const DEFAULT_ACCOUNT: &str = "develop-suda";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 5;

/// GitHub caps `per_page` at 100. Only the first page is ever requested.
pub const PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    /// Account whose public repositories are aggregated
    pub account: String,
    /// Base URL of the GitHub REST API, without trailing slash
    pub api_base: String,
    /// Media type sent in the `Accept` header of every upstream call
    pub accept: String,
    pub request_timeout: Duration,
    /// Maximum number of commit fetches in flight for one request
    pub max_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            accept: GITHUB_V3_ACCEPT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn new(account: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            account: account.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn repositories_url(&self, account: &str) -> String {
        format!(
            "{}/users/{}/repos?type=public&per_page={}",
            self.api_base, account, PER_PAGE
        )
    }

    /// No branch is passed, so GitHub answers with the default branch.
    pub fn commits_url(&self, full_name: &str) -> String {
        format!(
            "{}/repos/{}/commits?per_page={}",
            self.api_base, full_name, PER_PAGE
        )
    }
}
