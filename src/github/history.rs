//! Commit history aggregation across all public repositories of one account.
//!
//! Failure policy:
//! - the repository listing failing aborts the whole request
//! - a single repository's commit fetch failing is logged and skipped
//!
//! Commit fetches run with bounded concurrency but results are merged in
//! listing order, so the output stays grouped by repository.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::github::GitHubClient;
use crate::models::{CommitHistoryEntry, RawCommit, RepositorySummary};

/// Where repositories and their commits come from.
pub trait HistorySource: Send + Sync + 'static {
    fn list_public_repositories(
        &self,
        account: &str,
    ) -> impl Future<Output = Result<Vec<RepositorySummary>, UpstreamError>> + Send;

    fn list_commits(
        &self,
        full_name: &str,
    ) -> impl Future<Output = Result<Vec<RawCommit>, UpstreamError>> + Send;
}

impl HistorySource for GitHubClient {
    async fn list_public_repositories(
        &self,
        account: &str,
    ) -> Result<Vec<RepositorySummary>, UpstreamError> {
        GitHubClient::list_public_repositories(self, account).await
    }

    async fn list_commits(&self, full_name: &str) -> Result<Vec<RawCommit>, UpstreamError> {
        GitHubClient::list_commits(self, full_name).await
    }
}

pub struct HistoryAggregator<S> {
    config: Arc<Config>,
    source: Arc<S>,
}

pub type SharedHistory<S> = Arc<HistoryAggregator<S>>;

impl<S: HistorySource> HistoryAggregator<S> {
    pub fn new(config: Arc<Config>, source: S) -> Self {
        Self {
            config,
            source: Arc::new(source),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn build_history(&self) -> Result<Vec<CommitHistoryEntry>, UpstreamError> {
        let account = self.config.account.as_str();
        let repos = self
            .source
            .list_public_repositories(account)
            .await
            .inspect_err(|e| tracing::error!(account, error = %e, "Failed to fetch repositories"))?;

        tracing::info!(count = repos.len(), account, "Repositories fetched successfully");

        let source = Arc::clone(&self.source);
        let fetched: Vec<(RepositorySummary, Result<Vec<RawCommit>, UpstreamError>)> =
            stream::iter(repos)
                .map(move |repo| {
                    let source = Arc::clone(&source);
                    async move {
                        let result = source.list_commits(&repo.full_name).await;
                        (repo, result)
                    }
                })
                .buffered(self.config.max_concurrency.max(1))
                .collect()
                .await;

        let mut history = Vec::new();
        for (repo, result) in fetched {
            match result {
                Ok(commits) => {
                    tracing::debug!(
                        repository = %repo.name,
                        commit_count = commits.len(),
                        "Commits fetched for repository"
                    );
                    history.extend(
                        commits
                            .into_iter()
                            .map(|commit| CommitHistoryEntry::new(&repo, commit)),
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        repository = %repo.name,
                        full_name = %repo.full_name,
                        transport = e.is_transport(),
                        error = %e,
                        "Failed to fetch commits for repository"
                    );
                }
            }
        }

        tracing::info!(total_commits = history.len(), "Git history assembled");
        Ok(history)
    }
}
