use crate::error::UpstreamError;
use crate::github::GitHubClient;
use crate::models::RawCommit;

impl GitHubClient {
    /// Default-branch commits of `full_name` (`owner/name`), first page only.
    ///
    /// Order is whatever GitHub returns, newest first.
    pub async fn list_commits(&self, full_name: &str) -> Result<Vec<RawCommit>, UpstreamError> {
        let url = self.config().commits_url(full_name);
        tracing::debug!(url = %url, repository = full_name, "Fetching commits from GitHub API");

        let commits: Vec<RawCommit> = self.get_json(&url).await?;

        tracing::debug!(
            repository = full_name,
            commit_count = commits.len(),
            "Fetched commits"
        );
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::{Path, RawQuery};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use crate::config::Config;
    use crate::error::UpstreamError;
    use crate::github::test_support::serve;
    use crate::github::GitHubClient;

    #[tokio::test]
    async fn decodes_commits_in_upstream_order() {
        let app = Router::new().route(
            "/repos/{owner}/{repo}/commits",
            get(
                |Path((owner, repo)): Path<(String, String)>, RawQuery(query): RawQuery| async move {
                    assert_eq!((owner.as_str(), repo.as_str()), ("u", "a"));
                    assert_eq!(query.as_deref(), Some("per_page=100"));
                    Json(json!([
                        {
                            "sha": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                            "commit": {"message": "second", "author": {"name": "n", "email": "e", "date": "2024-02-02T00:00:00Z"}},
                            "html_url": "https://github.com/u/a/commit/bbbb"
                        },
                        {
                            "sha": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                            "commit": {"message": "first", "author": {"name": "n", "email": "e", "date": "2024-01-01T00:00:00Z"}},
                            "html_url": "https://github.com/u/a/commit/aaaa"
                        }
                    ]))
                },
            ),
        );
        let base = serve(app).await;
        let client = GitHubClient::new(Arc::new(Config::new("u", base))).unwrap();

        let commits = client.list_commits("u/a").await.unwrap();
        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[tokio::test]
    async fn empty_repository_conflict_is_api_error() {
        let app = Router::new().route(
            "/repos/{owner}/{repo}/commits",
            get(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"message": "Git Repository is empty."})),
                )
            }),
        );
        let base = serve(app).await;
        let client = GitHubClient::new(Arc::new(Config::new("u", base))).unwrap();

        let err = client.list_commits("u/empty").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Api { status: 409, .. }));
    }
}
