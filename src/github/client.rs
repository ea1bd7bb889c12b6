use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use super::types::Release;

/// Upstream repository the toolchain archives are published from.
const RELEASE_OWNER: &str = "dhall-lang";
const RELEASE_REPO: &str = "dhall-haskell";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetRelease: Send + Sync {
    /// Resolve a version identifier ("latest" or a tag name) to a
    /// concrete release.
    async fn get_release(&self, version: &str) -> Result<Release>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }

    fn release_url(&self, version: &str) -> String {
        let version_path = if version == "latest" {
            "latest".to_string()
        } else {
            format!("tags/{}", version)
        };

        format!(
            "{}/repos/{}/{}/releases/{}",
            self.api_url, RELEASE_OWNER, RELEASE_REPO, version_path
        )
    }
}

#[async_trait]
impl GetRelease for GitHub {
    #[tracing::instrument(skip(self))]
    async fn get_release(&self, version: &str) -> Result<Release> {
        let url = self.release_url(version);

        info!("Fetching dhall releases from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let status = response.status();
        if !status.is_success() {
            // Keep the response body: GitHub puts the reason there.
            let body = response.text().await.unwrap_or_default();
            bail!("GitHub API returned {}: {}", status, body);
        }

        debug!("Release metadata received, parsing assets");

        let release = response
            .json::<Release>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(release)
    }
}
