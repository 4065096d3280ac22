use crate::error::UpstreamError;
use crate::github::GitHubClient;
use crate::models::RepositorySummary;

impl GitHubClient {
    /// Public repositories of `account`, first page only (at most 100).
    pub async fn list_public_repositories(
        &self,
        account: &str,
    ) -> Result<Vec<RepositorySummary>, UpstreamError> {
        let url = self.config().repositories_url(account);
        tracing::debug!(url = %url, account, "Fetching repositories from GitHub API");

        let repos: Vec<RepositorySummary> = self.get_json(&url).await?;

        tracing::info!(repository_count = repos.len(), account, "Fetched repositories");
        Ok(repos)
    }
}
