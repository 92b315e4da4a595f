use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

/// GitHub requests carry the standard API media type.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetch the most recent release of a repository.
    ///
    /// Returns `None` when the repository has no releases.
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Option<Release>>;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.github.com".to_string());
        Self {
            http_client,
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Option<Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);

        debug!("Fetching releases from {}...", url);

        // The API returns releases most-recent-first, so the head of the
        // array is the latest release.
        let releases: Vec<Release> = self
            .http_client
            .get_json(&url, &[("Accept", GITHUB_ACCEPT)])
            .await
            .with_context(|| format!("Failed to fetch releases for {}", repo))?;

        Ok(releases.into_iter().next())
    }
}
