//! GitHub repository metadata API implementation

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::card::types::RepositoryMetadata;
use crate::fetch::error::FetchError;
use crate::fetch::source::RepositorySource;

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response from the GitHub repository API
#[derive(Debug, Deserialize)]
struct Repository {
    html_url: String,
    stargazers_count: u64,
    license: Option<License>,
    description: Option<String>,
    pushed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct License {
    name: String,
}

/// Repository metadata source backed by the GitHub API
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubSource {
    /// Creates a new GitHubSource with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("pkgcard")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RepositorySource for GitHubSource {
    async fn fetch_metadata(&self, repo: &str) -> Result<RepositoryMetadata, FetchError> {
        let url = format!("{}/repos/{}", self.base_url, repo);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(repo.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let repository: Repository = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub repository response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(RepositoryMetadata {
            url: repository.html_url,
            stars: repository.stargazers_count,
            license: repository.license.map(|l| l.name),
            description: repository.description,
            updated_at: repository.pushed_at,
        })
    }
}
