pub mod types;

pub use types::{Commit, CommitAuthor};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Invalid repository identifier: {0}")]
    InvalidRepo(String),

    #[error("GitHub token not found (pass --github-token or set GITHUB_ACCESS_TOKEN)")]
    MissingToken,
}

/// Source of commit history for a repository over a lookback window.
///
/// Implementors must be Send + Sync so the production and test fetches can
/// run concurrently via tokio::join!.
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Fetch all commits of `repo` whose author date falls within the last
    /// `lookback_days` days. No path filtering here — the audit core applies
    /// its own filter to the returned list.
    async fn fetch(&self, repo: &str, lookback_days: u32) -> Result<Vec<Commit>, GitHubError>;
}

/// Commit fetcher backed by the GitHub REST API.
#[derive(Debug)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    sha: String,
    commit: CommitData,
    author: Option<Account>,
}

#[derive(Deserialize)]
struct CommitData {
    message: String,
    author: Option<GitAuthor>,
}

#[derive(Deserialize)]
struct GitAuthor {
    name: String,
}

#[derive(Deserialize)]
struct Account {
    login: String,
}

#[derive(Deserialize)]
struct CommitDetail {
    #[serde(default)]
    files: Vec<FileEntry>,
}

#[derive(Deserialize)]
struct FileEntry {
    filename: String,
}

impl GitHubClient {
    /// Create a client for the API root of `host` (e.g. "github.com").
    pub fn new(host: &str, token: String) -> Self {
        GitHubClient {
            client: reqwest::Client::new(),
            base_url: format!("https://{}/api/v3", host),
            token,
        }
    }

    /// Commit search query for `repo` with an author-date lower bound.
    fn search_query(repo: &str, lookback_days: u32) -> String {
        let since = (Utc::now() - Duration::days(i64::from(lookback_days))).format("%Y-%m-%d");
        format!("repo:{} author-date:>{}", repo, since)
    }

    /// Resolve the changed-file paths of one commit. The search endpoint does
    /// not return file lists, so each commit costs one extra request.
    async fn fetch_files(&self, repo: &str, sha: &str) -> Result<Vec<String>, GitHubError> {
        let url = format!("{}/repos/{}/commits/{}", self.base_url, repo, sha);
        let detail = self
            .client
            .get(&url)
            .header("User-Agent", "test-auditor")
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<CommitDetail>()
            .await?;

        Ok(detail.files.into_iter().map(|f| f.filename).collect())
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    #[instrument(skip(self), fields(repo = %repo, lookback_days))]
    async fn fetch(&self, repo: &str, lookback_days: u32) -> Result<Vec<Commit>, GitHubError> {
        if repo.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(GitHubError::InvalidRepo(repo.to_string()));
        }

        let query = Self::search_query(repo, lookback_days);
        debug!(query = %query, "searching commits");

        let url = format!("{}/search/commits", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str()), ("per_page", "100")])
            .header("User-Agent", "test-auditor")
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;
        debug!(matches = response.items.len(), "received search results");

        let mut commits = Vec::with_capacity(response.items.len());
        for item in response.items {
            let files = self.fetch_files(repo, &item.sha).await?;
            let CommitData { message, author: git_author } = item.commit;
            // Display name comes from the commit metadata; commits with no
            // account association stay authorless and are handled downstream.
            let author = item.author.map(|account| CommitAuthor {
                name: git_author.map_or_else(|| account.login.clone(), |a| a.name),
                login: account.login,
            });
            commits.push(Commit {
                message,
                author,
                files,
            });
        }

        debug!(commits = commits.len(), "resolved commit file lists");
        Ok(commits)
    }
}
