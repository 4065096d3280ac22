use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RepositorySummary;

pub const SHORT_SHA_LEN: usize = 7;

/// Flattened form of one entry of `GET /repos/{full_name}/commits`.
///
/// The upstream payload keeps `sha` and `html_url` at the top level and
/// nests message and author under `commit` and `commit.author`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CommitPayload")]
pub struct RawCommit {
    pub sha: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub author_date: DateTime<Utc>,
    pub html_url: String,
}

#[derive(Deserialize)]
struct CommitPayload {
    sha: String,
    commit: GitCommit,
    html_url: String,
}

#[derive(Deserialize)]
struct GitCommit {
    message: String,
    author: GitSignature,
}

#[derive(Deserialize)]
struct GitSignature {
    name: String,
    email: String,
    date: DateTime<Utc>,
}

impl From<CommitPayload> for RawCommit {
    fn from(payload: CommitPayload) -> Self {
        let CommitPayload {
            sha,
            commit,
            html_url,
        } = payload;
        Self {
            sha,
            message: commit.message,
            author_name: commit.author.name,
            author_email: commit.author.email,
            author_date: commit.author.date,
            html_url,
        }
    }
}

impl RawCommit {
    /// First seven characters of the sha, or the whole sha if shorter.
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }
}

/// One row of the `/api/git-history` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitHistoryEntry {
    pub repository_name: String,
    pub commit_message: String,
    pub commit_sha: String,
    pub commit_time: DateTime<Utc>,
    pub commit_url: String,
}

impl CommitHistoryEntry {
    pub fn new(repository: &RepositorySummary, commit: RawCommit) -> Self {
        Self {
            repository_name: repository.name.clone(),
            commit_sha: commit.short_sha().to_string(),
            commit_message: commit.message,
            commit_time: commit.author_date,
            commit_url: commit.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const COMMITS: &str = r#"[{
        "sha": "1234567890abcdef1234567890abcdef12345678",
        "node_id": "C_kwDO",
        "commit": {
            "author": {"name": "Suda", "email": "suda@example.com", "date": "2024-03-01T12:34:56Z"},
            "committer": {"name": "GitHub", "email": "noreply@github.com", "date": "2024-03-01T12:35:00Z"},
            "message": "init"
        },
        "html_url": "https://github.com/u/a/commit/1234567890abcdef1234567890abcdef12345678"
    }]"#;

    fn repo(name: &str) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            full_name: format!("u/{name}"),
            description: String::new(),
            html_url: format!("https://github.com/u/{name}"),
        }
    }

    #[test]
    fn flattens_nested_commit_payload() {
        let commits: Vec<RawCommit> = serde_json::from_str(COMMITS).unwrap();
        let commit = &commits[0];
        assert_eq!(commit.message, "init");
        assert_eq!(commit.author_name, "Suda");
        assert_eq!(commit.author_email, "suda@example.com");
        assert_eq!(
            commit.author_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 34, 56).unwrap()
        );
        assert!(commit.html_url.ends_with("/commit/1234567890abcdef1234567890abcdef12345678"));
    }

    #[test]
    fn missing_author_is_a_decode_error() {
        let body = r#"[{"sha": "abc", "commit": {"message": "m"}, "html_url": "u"}]"#;
        assert!(serde_json::from_str::<Vec<RawCommit>>(body).is_err());
    }

    #[test]
    fn short_sha_is_seven_char_prefix() {
        let commits: Vec<RawCommit> = serde_json::from_str(COMMITS).unwrap();
        let commit = &commits[0];
        assert_eq!(commit.short_sha(), "1234567");
        assert!(commit.sha.starts_with(commit.short_sha()));
    }

    #[test]
    fn short_sha_keeps_shorter_input() {
        let mut commit: RawCommit = serde_json::from_str::<Vec<RawCommit>>(COMMITS)
            .unwrap()
            .remove(0);
        commit.sha = "abc".to_string();
        assert_eq!(commit.short_sha(), "abc");
    }

    #[test]
    fn short_sha_counts_characters_not_bytes() {
        let mut commit: RawCommit = serde_json::from_str::<Vec<RawCommit>>(COMMITS)
            .unwrap()
            .remove(0);
        commit.sha = "ééééééééé".to_string();
        assert_eq!(commit.short_sha(), "ééééééé");

        commit.sha = "ééééé".to_string();
        assert_eq!(commit.short_sha(), "ééééé");
    }

    #[test]
    fn entry_serializes_with_rfc3339_time() {
        let commit = serde_json::from_str::<Vec<RawCommit>>(COMMITS)
            .unwrap()
            .remove(0);
        let entry = CommitHistoryEntry::new(&repo("a"), commit);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["repository_name"], "a");
        assert_eq!(json["commit_message"], "init");
        assert_eq!(json["commit_sha"], "1234567");
        assert_eq!(json["commit_time"], "2024-03-01T12:34:56Z");
        assert_eq!(
            json["commit_url"],
            "https://github.com/u/a/commit/1234567890abcdef1234567890abcdef12345678"
        );
    }
}
